use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Parse Errors (reader)
/// - [`Error::Malformed`] - The document lacks the minimal `Edmx` → `DataServices` structure,
///   or its element nesting is broken
/// - [`Error::Xml`] - The underlying XML parser rejected the text
/// - [`Error::XmlAttribute`] - An attribute list could not be parsed
/// - [`Error::Encoding`] - Names or values could not be decoded as UTF-8
///
/// ## Strict Reading
/// - [`Error::DuplicateEntityType`] - A qualified entity type name appeared twice
/// - [`Error::DuplicateEntitySet`] - An entity set name appeared twice
///
/// Both are only returned when the reader runs with [`crate::ReaderConfig::strict`].
///
/// ## Output Errors (writer)
/// - [`Error::Io`] - The output sink failed
///
/// Use [`Error::is_parse_error`] to tell a document that could not be parsed apart from
/// every other failure.
///
/// # Examples
///
/// ```rust
/// use odatascope::{Error, read_metadata};
///
/// match read_metadata("<edmx:Edmx") {
///     Ok(metadata) if metadata.is_empty() => println!("service has no entities"),
///     Ok(metadata) => println!("{} entity sets", metadata.entity_sets.len()),
///     Err(e) if e.is_parse_error() => eprintln!("metadata could not be parsed: {e}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The document is damaged and could not be turned into metadata.
    ///
    /// Raised when there is no root element, when the root element has no child
    /// element, when tags are left open at the end of the input, or when content
    /// follows the root element. The error includes the source location where the
    /// malformation was detected for debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// The XML parser rejected the document.
    ///
    /// `position` is the byte offset into the input reported by the parser.
    #[error("XML error at byte {position}: {source}")]
    Xml {
        /// Byte offset of the offending fragment
        position: u64,
        /// The parser error
        #[source]
        source: quick_xml::Error,
    },

    /// An element carried an attribute list that could not be parsed.
    #[error("Invalid attribute at byte {position}: {source}")]
    XmlAttribute {
        /// Byte offset of the element holding the attribute
        position: u64,
        /// The attribute error
        #[source]
        source: quick_xml::events::attributes::AttrError,
    },

    /// Text could not be decoded or unescaped.
    #[error("Invalid encoding - {0}")]
    Encoding(String),

    /// The same qualified entity type name was declared more than once.
    #[error("Duplicate entity type - {0}")]
    DuplicateEntityType(String),

    /// The same entity set name was declared more than once.
    #[error("Duplicate entity set - {0}")]
    DuplicateEntitySet(String),

    /// I/O error while writing a document.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if this error means the metadata document could not be read.
    ///
    /// Callers use this to show "metadata could not be parsed" instead of a generic failure.
    /// A document that parses but declares nothing is not an error at all; it yields an empty
    /// [`crate::Metadata`].
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::Malformed { .. }
                | Error::Xml { .. }
                | Error::XmlAttribute { .. }
                | Error::Encoding(_)
                | Error::DuplicateEntityType(_)
                | Error::DuplicateEntitySet(_)
        )
    }
}

// Errors raised outside of a reader loop have no meaningful position.
impl From<quick_xml::Error> for Error {
    fn from(source: quick_xml::Error) -> Self {
        Error::Xml {
            position: 0,
            source,
        }
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(error: std::str::Utf8Error) -> Self {
        Error::Encoding(error.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(error: std::string::FromUtf8Error) -> Self {
        Error::Encoding(error.to_string())
    }
}
