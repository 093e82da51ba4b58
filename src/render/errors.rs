//! Collection error fragment.

use crate::domain::CollectionError;

pub fn format_errors(errors: &[CollectionError]) -> String {
    errors.iter().map(|err| format!("❌ {err}")).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReportKind;
    use std::path::PathBuf;

    #[test]
    fn no_errors_renders_nothing() {
        assert_eq!(format_errors(&[]), "");
    }

    #[test]
    fn renders_one_line_per_error() {
        let errors = vec![
            CollectionError::Parse {
                kind: ReportKind::Base,
                path: PathBuf::from("base.json"),
                message: "expected value at line 1 column 1".to_string(),
            },
            CollectionError::Read {
                kind: ReportKind::Head,
                path: PathBuf::from("head.json"),
                message: "permission denied".to_string(),
            },
        ];

        insta::assert_snapshot!(format_errors(&errors), @r###"
        ❌ Failed to parse base report `base.json`: expected value at line 1 column 1
        ❌ Failed to read head report `head.json`: permission denied
        "###);
    }
}
