/// Substitute `{{name}}` markers in an HTML template.
///
/// The output is built in a single left-to-right pass over the template, so
/// a substituted value is never rescanned: user text that happens to contain
/// a marker cannot trigger a second substitution. Markers with no matching
/// entry are emitted unchanged. Single braces (CSS blocks, inline JS) pass
/// through untouched.
pub fn render_template(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        rendered.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        match after_open.find("}}") {
            Some(close) => {
                let name = &after_open[..close];
                match substitutions.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => rendered.push_str(value),
                    None => {
                        rendered.push_str("{{");
                        rendered.push_str(name);
                        rendered.push_str("}}");
                    }
                }
                rest = &after_open[close + 2..];
            }
            None => {
                // An opening pair with no closing pair: keep it literal.
                rendered.push_str("{{");
                rest = after_open;
            }
        }
    }
    rendered.push_str(rest);
    rendered
}
