use clap::ValueEnum;

/// Diagram output format selected on the command line or in the config
/// file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Graphviz DOT (default)
    #[default]
    Dot,
    /// Mermaid flowchart
    Mermaid,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" => Ok(OutputFormat::Dot),
            "mermaid" | "mmd" => Ok(OutputFormat::Mermaid),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'dot' or 'mermaid'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str_dot() {
        assert_eq!(
            <OutputFormat as FromStr>::from_str("dot").unwrap(),
            OutputFormat::Dot
        );
        assert_eq!(
            <OutputFormat as FromStr>::from_str("DOT").unwrap(),
            OutputFormat::Dot
        );
    }

    #[test]
    fn test_output_format_from_str_mermaid() {
        assert_eq!(
            <OutputFormat as FromStr>::from_str("mermaid").unwrap(),
            OutputFormat::Mermaid
        );
        assert_eq!(
            <OutputFormat as FromStr>::from_str("mmd").unwrap(),
            OutputFormat::Mermaid
        );
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let error = <OutputFormat as FromStr>::from_str("svg").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("dot"));
        assert!(error.contains("mermaid"));
    }

    #[test]
    fn test_output_format_default_is_dot() {
        assert_eq!(OutputFormat::default(), OutputFormat::Dot);
    }
}
