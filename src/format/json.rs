use crate::diff::Diff;

pub(super) fn render(diff: &Diff) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(diff)
}
