//! Placeholder substitution for sentence templates

/// Replace every `{name}` placeholder in `template` with `lookup(name)`.
///
/// Substitution is a single left-to-right pass, so text inserted for one
/// placeholder is never scanned for further placeholders. Placeholders the
/// lookup does not know, and an unterminated `{`, are copied through as-is.
pub fn render<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        rendered.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let Some(end) = after.find('}') else {
            rendered.push_str(&rest[start..]);
            return rendered;
        };

        let name = &after[..end];
        match lookup(name) {
            Some(value) => rendered.push_str(value),
            None => {
                rendered.push('{');
                rendered.push_str(name);
                rendered.push('}');
            }
        }
        rest = &after[end + 1..];
    }

    rendered.push_str(rest);
    rendered
}
