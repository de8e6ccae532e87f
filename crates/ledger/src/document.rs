//! Funding-request document generation.
//!
//! A template is a text file with `{{ name }}` placeholders. Filling
//! it is a pure function over (template, field map): the file is read,
//! every placeholder is substituted, and the result comes back as
//! bytes for the download. A missing template and an unmatched
//! placeholder are recoverable failures; the caller keeps the entered
//! field values and can retry after fixing the template.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use crate::{LedgerError, ResultLedger};

/// Renders `template_path` with the given fields.
pub fn render_template(
    template_path: &Path,
    fields: &HashMap<String, String>,
) -> ResultLedger<Vec<u8>> {
    let template = std::fs::read_to_string(template_path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            LedgerError::TemplateNotFound(template_path.display().to_string())
        } else {
            LedgerError::Load(err.to_string())
        }
    })?;

    Ok(fill_placeholders(&template, fields)?.into_bytes())
}

fn fill_placeholders(
    template: &str,
    fields: &HashMap<String, String>,
) -> ResultLedger<String> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            // A lone "{{" with no closing braces is literal text.
            output.push_str(&rest[start..]);
            rest = "";
            break;
        };
        let token = after[..end].trim();
        let value = fields
            .get(token)
            .ok_or_else(|| LedgerError::TemplateRender(token.to_string()))?;
        output.push_str(value);
        rest = &after[end + 2..];
    }

    output.push_str(rest);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn fills_all_placeholders() {
        let template = "Antrag: {{ projekt_name }} ({{ datum }})\nKosten: {{ gesamtkosten }}";
        let filled = fill_placeholders(
            template,
            &fields(&[
                ("projekt_name", "Minilager 2025"),
                ("datum", "Sommer 2025"),
                ("gesamtkosten", "500.00"),
            ]),
        )
        .unwrap();
        assert_eq!(filled, "Antrag: Minilager 2025 (Sommer 2025)\nKosten: 500.00");
    }

    #[test]
    fn unmatched_placeholder_names_the_token() {
        let err = fill_placeholders("{{ antragsteller }}", &fields(&[])).unwrap_err();
        assert_eq!(err, LedgerError::TemplateRender("antragsteller".to_string()));
    }

    #[test]
    fn unclosed_braces_are_literal() {
        let filled = fill_placeholders("a {{ b", &fields(&[])).unwrap();
        assert_eq!(filled, "a {{ b");
    }

    #[test]
    fn missing_template_file_is_its_own_error() {
        let err = render_template(Path::new("/nonexistent/vorlage.txt"), &fields(&[]))
            .unwrap_err();
        assert!(matches!(err, LedgerError::TemplateNotFound(_)));
    }
}
