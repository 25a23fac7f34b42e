//! Language descriptor table
//!
//! Comment syntax is modeled as plain data: adding a language is a new
//! table entry, not new code. Block comments are not nested.

/// Comment syntax and extensions for one language.
#[derive(Debug, Clone, Copy)]
pub struct LanguageDescriptor {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    /// Single-line comment prefix, if the language has one
    pub line_comment: Option<&'static str>,
    /// Block comment start/end token pair, if the language has one
    pub block_comment: Option<(&'static str, &'static str)>,
}

/// Language name used for files with unmapped extensions.
pub const OTHER_LANGUAGE: &str = "Other";

const C_BLOCK: Option<(&str, &str)> = Some(("/*", "*/"));

/// Supported languages. Extensions are matched lowercase.
pub const LANGUAGES: &[LanguageDescriptor] = &[
    LanguageDescriptor {
        name: "Python",
        extensions: &["py", "pyw", "pyx"],
        line_comment: Some("#"),
        block_comment: None,
    },
    LanguageDescriptor {
        name: "JavaScript",
        extensions: &["js", "jsx", "mjs", "cjs"],
        line_comment: Some("//"),
        block_comment: C_BLOCK,
    },
    LanguageDescriptor {
        name: "TypeScript",
        extensions: &["ts", "tsx"],
        line_comment: Some("//"),
        block_comment: C_BLOCK,
    },
    LanguageDescriptor {
        name: "Java",
        extensions: &["java"],
        line_comment: Some("//"),
        block_comment: C_BLOCK,
    },
    LanguageDescriptor {
        name: "C",
        extensions: &["c", "h"],
        line_comment: Some("//"),
        block_comment: C_BLOCK,
    },
    LanguageDescriptor {
        name: "C++",
        extensions: &["cpp", "hpp", "cc", "cxx", "hxx"],
        line_comment: Some("//"),
        block_comment: C_BLOCK,
    },
    LanguageDescriptor {
        name: "C#",
        extensions: &["cs"],
        line_comment: Some("//"),
        block_comment: C_BLOCK,
    },
    LanguageDescriptor {
        name: "Go",
        extensions: &["go"],
        line_comment: Some("//"),
        block_comment: C_BLOCK,
    },
    LanguageDescriptor {
        name: "Rust",
        extensions: &["rs"],
        line_comment: Some("//"),
        block_comment: C_BLOCK,
    },
    LanguageDescriptor {
        name: "PHP",
        extensions: &["php", "phtml"],
        line_comment: Some("//"),
        block_comment: C_BLOCK,
    },
    LanguageDescriptor {
        name: "Ruby",
        extensions: &["rb"],
        line_comment: Some("#"),
        block_comment: Some(("=begin", "=end")),
    },
    LanguageDescriptor {
        name: "Swift",
        extensions: &["swift"],
        line_comment: Some("//"),
        block_comment: C_BLOCK,
    },
    LanguageDescriptor {
        name: "Kotlin",
        extensions: &["kt", "kts"],
        line_comment: Some("//"),
        block_comment: C_BLOCK,
    },
    LanguageDescriptor {
        name: "Scala",
        extensions: &["scala"],
        line_comment: Some("//"),
        block_comment: C_BLOCK,
    },
    LanguageDescriptor {
        name: "R",
        extensions: &["r"],
        line_comment: Some("#"),
        block_comment: None,
    },
    LanguageDescriptor {
        name: "Shell",
        extensions: &["sh", "bash", "zsh"],
        line_comment: Some("#"),
        block_comment: None,
    },
    LanguageDescriptor {
        name: "SQL",
        extensions: &["sql"],
        line_comment: Some("--"),
        block_comment: C_BLOCK,
    },
    LanguageDescriptor {
        name: "HTML",
        extensions: &["html", "htm"],
        line_comment: None,
        block_comment: Some(("<!--", "-->")),
    },
    LanguageDescriptor {
        name: "CSS",
        extensions: &["css", "scss", "sass", "less"],
        line_comment: None,
        block_comment: C_BLOCK,
    },
    LanguageDescriptor {
        name: "Vue",
        extensions: &["vue"],
        line_comment: None,
        block_comment: Some(("<!--", "-->")),
    },
    LanguageDescriptor {
        name: "Dart",
        extensions: &["dart"],
        line_comment: Some("//"),
        block_comment: C_BLOCK,
    },
];

/// Look up the descriptor for a file extension (without the dot,
/// case-insensitive). None for unmapped extensions.
pub fn descriptor_for_extension(ext: &str) -> Option<&'static LanguageDescriptor> {
    let ext = ext.to_ascii_lowercase();
    LANGUAGES
        .iter()
        .find(|lang| lang.extensions.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_resolve() {
        assert_eq!(descriptor_for_extension("rs").map(|l| l.name), Some("Rust"));
        assert_eq!(descriptor_for_extension("py").map(|l| l.name), Some("Python"));
        assert_eq!(descriptor_for_extension("tsx").map(|l| l.name), Some("TypeScript"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(descriptor_for_extension("R").map(|l| l.name), Some("R"));
        assert_eq!(descriptor_for_extension("PY").map(|l| l.name), Some("Python"));
    }

    #[test]
    fn unmapped_extension_is_none() {
        assert!(descriptor_for_extension("xyz").is_none());
        assert!(descriptor_for_extension("").is_none());
    }

    #[test]
    fn extensions_are_not_shared_between_languages() {
        let mut seen = std::collections::HashSet::new();
        for lang in LANGUAGES {
            for ext in lang.extensions {
                assert!(seen.insert(*ext), "extension {ext} mapped twice");
            }
        }
    }
}
