//! Typed request parameters: closed enumerations, pagination and date ranges.
//!
//! Enumerated parameters are modeled as closed Rust enums so invalid values
//! are caught where strings enter the system (CLI arguments, configuration
//! files). [`FromStr`] implementations are case-sensitive against the
//! canonical sets; lower-casing happens only when a value is rendered into a
//! path segment or query value.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::CovalentError;

/// Quote currencies accepted by the pricing endpoints.
///
/// Covalent prices can be denominated in a fixed set of fiat currencies plus
/// ETH. The canonical spelling is upper-case; query and path values are
/// rendered lower-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteCurrency {
    #[default]
    Usd,
    Cad,
    Eur,
    Sgd,
    Inr,
    Jpy,
    Vnd,
    Cny,
    Krw,
    Rub,
    Try,
    Eth,
}

impl QuoteCurrency {
    /// Human-readable description of the accepted set, used in error messages.
    pub const ACCEPTED: &'static str = "USD, CAD, EUR, SGD, INR, JPY, VND, CNY, KRW, RUB, TRY, ETH";

    /// The canonical upper-case code.
    pub fn canonical(&self) -> &'static str {
        match self {
            QuoteCurrency::Usd => "USD",
            QuoteCurrency::Cad => "CAD",
            QuoteCurrency::Eur => "EUR",
            QuoteCurrency::Sgd => "SGD",
            QuoteCurrency::Inr => "INR",
            QuoteCurrency::Jpy => "JPY",
            QuoteCurrency::Vnd => "VND",
            QuoteCurrency::Cny => "CNY",
            QuoteCurrency::Krw => "KRW",
            QuoteCurrency::Rub => "RUB",
            QuoteCurrency::Try => "TRY",
            QuoteCurrency::Eth => "ETH",
        }
    }

    /// Lower-case form used in URLs.
    pub(crate) fn url_value(&self) -> String {
        self.canonical().to_ascii_lowercase()
    }
}

impl FromStr for QuoteCurrency {
    type Err = CovalentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(QuoteCurrency::Usd),
            "CAD" => Ok(QuoteCurrency::Cad),
            "EUR" => Ok(QuoteCurrency::Eur),
            "SGD" => Ok(QuoteCurrency::Sgd),
            "INR" => Ok(QuoteCurrency::Inr),
            "JPY" => Ok(QuoteCurrency::Jpy),
            "VND" => Ok(QuoteCurrency::Vnd),
            "CNY" => Ok(QuoteCurrency::Cny),
            "KRW" => Ok(QuoteCurrency::Krw),
            "RUB" => Ok(QuoteCurrency::Rub),
            "TRY" => Ok(QuoteCurrency::Try),
            "ETH" => Ok(QuoteCurrency::Eth),
            other => Err(CovalentError::InvalidParameter {
                field: "quote-currency",
                value: other.to_string(),
                accepted: Self::ACCEPTED,
            }),
        }
    }
}

impl fmt::Display for QuoteCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

/// Response serialization requested from the remote service.
///
/// This only influences the `format` query flag; the request itself always
/// carries an `application/json` content type and the response body is
/// returned to the caller unparsed either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl OutputFormat {
    pub const ACCEPTED: &'static str = "JSON, CSV";

    pub fn canonical(&self) -> &'static str {
        match self {
            OutputFormat::Json => "JSON",
            OutputFormat::Csv => "CSV",
        }
    }

    pub(crate) fn url_value(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CovalentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JSON" => Ok(OutputFormat::Json),
            "CSV" => Ok(OutputFormat::Csv),
            other => Err(CovalentError::InvalidParameter {
                field: "format",
                value: other.to_string(),
                accepted: Self::ACCEPTED,
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

/// Sort direction for endpoints with an `...-asc` toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub const ACCEPTED: &'static str = "asc, desc";

    /// The value of the endpoint's `...-asc` query flag.
    pub(crate) fn asc_flag(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "true",
            SortOrder::Descending => "false",
        }
    }
}

impl FromStr for SortOrder {
    type Err = CovalentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            other => Err(CovalentError::InvalidParameter {
                field: "sort-order",
                value: other.to_string(),
                accepted: Self::ACCEPTED,
            }),
        }
    }
}

/// Pagination window passed through to the remote service.
///
/// Page numbers start at zero; the page size must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    page_number: u64,
    page_size: u64,
}

impl PageOptions {
    pub fn new(page_number: u64, page_size: u64) -> Result<Self, CovalentError> {
        if page_size == 0 {
            return Err(CovalentError::InvalidParameter {
                field: "page-size",
                value: page_size.to_string(),
                accepted: "a positive integer",
            });
        }
        Ok(Self {
            page_number,
            page_size,
        })
    }

    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }
}

/// Optional day-granularity range for the price-history endpoints.
///
/// Bounds are independent; an absent bound is simply not sent and the remote
/// service applies its own default window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DayRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }
}

/// Joins list-valued input into a single comma-separated value.
///
/// Each element may itself contain commas (callers often pass one
/// pre-joined string); every piece is trimmed and blank pieces are dropped.
/// Returns `None` when nothing survives, in which case the parameter is
/// omitted entirely rather than sent as an empty delimiter sequence.
pub(crate) fn join_list<S: AsRef<str>>(values: &[S]) -> Option<String> {
    let parts: Vec<&str> = values
        .iter()
        .flat_map(|v| v.as_ref().split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_currency_parses_canonical_values() {
        assert_eq!("USD".parse::<QuoteCurrency>().unwrap(), QuoteCurrency::Usd);
        assert_eq!("ETH".parse::<QuoteCurrency>().unwrap(), QuoteCurrency::Eth);
    }

    #[test]
    fn quote_currency_is_case_sensitive() {
        let err = "usd".parse::<QuoteCurrency>().unwrap_err();
        match err {
            CovalentError::InvalidParameter {
                field,
                value,
                accepted,
            } => {
                assert_eq!(field, "quote-currency");
                assert_eq!(value, "usd");
                assert!(accepted.contains("USD"));
                assert!(accepted.contains("ETH"));
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn output_format_rejects_unknown_values() {
        assert!("JSON".parse::<OutputFormat>().is_ok());
        assert!("CSV".parse::<OutputFormat>().is_ok());
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("JSON, CSV"));
    }

    #[test]
    fn sort_order_parses_short_forms_only() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert!("ascending".parse::<SortOrder>().is_err());
    }

    #[test]
    fn page_size_must_be_positive() {
        assert!(PageOptions::new(0, 100).is_ok());
        let err = PageOptions::new(0, 0).unwrap_err();
        assert!(err.to_string().contains("page-size"));
    }

    #[test]
    fn join_list_trims_and_splits() {
        assert_eq!(
            join_list(&["TRIBE, MATIC ,1INCH"]).as_deref(),
            Some("TRIBE,MATIC,1INCH")
        );
        assert_eq!(join_list(&["a", " b ", "c"]).as_deref(), Some("a,b,c"));
    }

    #[test]
    fn join_list_collapses_blank_input() {
        assert_eq!(join_list(&[", ,", "  "]), None);
        assert_eq!(join_list::<&str>(&[]), None);
    }
}
