use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{Error, Result};

pub const SEPARATOR: char = ',';
pub const QUOTE: char = '"';

/// Turns a sequence of fields into one delimited text line.
pub trait LineFormat {
    /// Fields are quoted only when they contain the delimiter, the quote
    /// character or a line break; embedded quotes are doubled.
    fn format_line(&self, fields: &[String]) -> Result<String>;

    /// Every field is quoted.
    fn format_quoted_line(&self, fields: &[String]) -> Result<String>;
}

/// CSV flavoured [`LineFormat`], backed by the `csv` writer. Lines end in `\n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvLineFormat {
    delimiter: u8,
    quote: u8,
}

impl CsvLineFormat {
    pub fn new(delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() || delimiter == QUOTE || delimiter == '\n' || delimiter == '\r' {
            return Err(Error::InvalidConfig(format!("unsupported delimiter {:?}", delimiter)));
        }

        Ok(CsvLineFormat { delimiter: delimiter as u8, quote: QUOTE as u8 })
    }

    pub fn delimiter(&self) -> char {
        self.delimiter as char
    }

    fn write(&self, fields: &[String], style: QuoteStyle) -> Result<String> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote(self.quote)
            .double_quote(true)
            .quote_style(style)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(fields)?;
        let bytes = writer.into_inner()?;

        Ok(String::from_utf8(bytes)?)
    }
}

impl Default for CsvLineFormat {
    fn default() -> Self {
        CsvLineFormat { delimiter: SEPARATOR as u8, quote: QUOTE as u8 }
    }
}

impl LineFormat for CsvLineFormat {
    fn format_line(&self, fields: &[String]) -> Result<String> {
        self.write(fields, QuoteStyle::Necessary)
    }

    fn format_quoted_line(&self, fields: &[String]) -> Result<String> {
        self.write(fields, QuoteStyle::Always)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn quotes_only_when_needed() {
        let format = CsvLineFormat::default();
        let line = format.format_line(&fields(&["plain", "a,b", "say \"hi\"", ""])).unwrap();
        assert_eq!(line, "plain,\"a,b\",\"say \"\"hi\"\"\",\n");
    }

    #[test]
    fn quoted_line_quotes_everything() {
        let format = CsvLineFormat::default();
        assert_eq!(format.format_quoted_line(&fields(&["Service base name: x."])).unwrap(), "\"Service base name: x.\"\n");
    }

    #[test]
    fn custom_delimiter() {
        let format = CsvLineFormat::new(';').unwrap();
        assert_eq!(format.format_line(&fields(&["a;b", "a,b"])).unwrap(), "\"a;b\";a,b\n");
    }

    #[test]
    fn quote_char_is_not_a_delimiter() {
        assert!(CsvLineFormat::new('"').is_err());
        assert!(CsvLineFormat::new('é').is_err());
    }
}
