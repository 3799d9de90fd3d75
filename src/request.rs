//! Request construction: endpoint descriptors and deterministic URL assembly.
//!
//! Every operation funnels through [`UrlAssembler`], which interpolates path
//! segments, percent-encodes values and appends query parameters in a fixed
//! order so that identical inputs always produce byte-identical URLs. All
//! validation (credential presence, required parameters) completes here,
//! before any network request is attempted.

use chrono::{DateTime, NaiveDate, Utc};
use log::trace;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::Method;
use url::Url;

use crate::config::ClientConfig;
use crate::error::CovalentError;
use crate::params::{OutputFormat, PageOptions, QuoteCurrency, SortOrder, join_list};

/// Characters escaped in interpolated path segments.
///
/// Includes `:` so timestamp segments render their colons as `%3A`, and `,`
/// so comma-joined path lists render their separators as `%2C`.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%')
    .add(b':')
    .add(b',');

/// Characters escaped in query values.
///
/// Includes the comma so list separators render as `%2C`.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b',')
    .add(b':')
    .add(b'?')
    .add(b'\'');

/// How an endpoint carries the quote currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CurrencyRule {
    /// Rendered as a path segment; resolved explicit argument → configured
    /// default → USD.
    Path,
    /// Emitted as an optional `quote-currency` query parameter; omitted when
    /// neither an explicit argument nor a configured default is present.
    Query,
    /// The endpoint takes no quote currency.
    None,
}

/// Static descriptor for one remote endpoint.
///
/// Defined once per operation and never mutated. The descriptor controls
/// which of the common trailing parameters the assembled URL may carry.
#[derive(Debug)]
pub(crate) struct EndpointSpec {
    /// Short operation name used in diagnostics.
    pub name: &'static str,
    pub currency: CurrencyRule,
    pub pagination: bool,
}

/// Per-call options shared by every operation.
///
/// Each field overrides the corresponding configured default; `None` defers
/// to [`ClientConfig`]. Pagination is only rendered for endpoints that
/// support it.
#[derive(Debug, Clone, Default)]
pub struct CommonOptions {
    /// Overrides the configured API key for this call only.
    pub api_key: Option<String>,
    pub quote_currency: Option<QuoteCurrency>,
    pub format: Option<OutputFormat>,
    pub page: Option<PageOptions>,
    /// Primer pairs (filter, sort, group, limit, skip), passed through as
    /// opaque query parameters without local interpretation.
    pub primer: Vec<(String, String)>,
}

/// A fully assembled request, ready for the transport.
///
/// The method is always GET and the request content type is always
/// `application/json`; the requested output format only influences the
/// `format` query flag, which the remote service interprets.
#[derive(Debug, Clone)]
pub struct ResolvedRequest {
    pub url: Url,
    pub method: Method,
    pub content_type: &'static str,
}

/// Validates that an API key is present, preferring the explicit per-call
/// value over the configured default.
///
/// Empty and whitespace-only candidates count as absent, so a blank
/// explicit value falls through to the configured key. Runs before URL
/// assembly completes so a doomed call never reaches the network.
fn resolve_api_key<'a>(
    explicit: Option<&'a str>,
    config: &'a ClientConfig,
) -> Result<&'a str, CovalentError> {
    let present = |s: &&str| !s.is_empty();
    explicit
        .map(str::trim)
        .filter(present)
        .or_else(|| config.api_key.as_deref().map(str::trim).filter(present))
        .ok_or(CovalentError::MissingCredential)
}

/// Incrementally assembles the path and query of one request.
///
/// Path methods append segments in call order; query methods append pairs in
/// call order after the unconditional `key` parameter. [`Self::finish`]
/// appends the common trailing parameters (pagination, quote currency,
/// format) in a fixed order and validates the result as a well-formed URL.
pub(crate) struct UrlAssembler<'a> {
    spec: &'static EndpointSpec,
    config: &'a ClientConfig,
    path: String,
    query: String,
}

impl<'a> UrlAssembler<'a> {
    pub fn new(spec: &'static EndpointSpec, config: &'a ClientConfig) -> Self {
        Self {
            spec,
            config,
            path: String::from("/v1"),
            query: String::new(),
        }
    }

    /// Appends a trusted literal path segment.
    pub fn lit(mut self, segment: &str) -> Self {
        self.path.push('/');
        self.path.push_str(segment);
        self
    }

    /// Appends the chain id as a decimal path segment.
    pub fn chain(mut self, chain_id: u64) -> Self {
        self.path.push('/');
        self.path.push_str(&chain_id.to_string());
        self
    }

    /// Appends an identifier path segment (address, ticker, tx hash).
    ///
    /// The value is trimmed and lower-cased before interpolation; a blank
    /// value fails naming the missing field.
    pub fn ident(self, field: &'static str, value: &str) -> Result<Self, CovalentError> {
        self.ident_exact(field, &value.to_lowercase())
    }

    /// Appends a free-text path segment, preserving its case.
    ///
    /// Trimmed and rejected when blank like [`Self::ident`], but without the
    /// lower-casing, which only applies to addresses, hashes and tickers.
    pub fn ident_exact(mut self, field: &'static str, value: &str) -> Result<Self, CovalentError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(CovalentError::MissingParameter(field));
        }
        self.path.push('/');
        self.path.extend(utf8_percent_encode(value, PATH_SEGMENT));
        Ok(self)
    }

    /// Appends a comma-joined list as a single path segment.
    ///
    /// Elements are trimmed, blanks dropped and the separators rendered as
    /// `%2C`. An all-blank list fails naming the missing field, since path
    /// lists are required.
    pub fn ident_list<S: AsRef<str>>(
        self,
        field: &'static str,
        values: &[S],
    ) -> Result<Self, CovalentError> {
        let joined = join_list(values).ok_or(CovalentError::MissingParameter(field))?;
        self.ident(field, &joined)
    }

    /// Appends the resolved quote currency as a lower-case path segment.
    pub fn currency(mut self, common: &CommonOptions) -> Self {
        let currency = common
            .quote_currency
            .or(self.config.quote_currency)
            .unwrap_or_default();
        self.path.push('/');
        self.path.push_str(&currency.url_value());
        self
    }

    /// Appends a block-height segment, rendering the literal `latest` when
    /// no height is given.
    pub fn height_or_latest(mut self, height: Option<u64>) -> Self {
        self.path.push('/');
        match height {
            Some(height) => self.path.push_str(&height.to_string()),
            None => self.path.push_str("latest"),
        }
        self
    }

    /// Appends a UTC timestamp segment (`yyyy-mm-ddThh:mm:ssZ`, colons
    /// rendered `%3A`), or the literal `latest` when absent.
    pub fn timestamp_or_latest(mut self, ts: Option<DateTime<Utc>>) -> Self {
        self.path.push('/');
        match ts {
            Some(ts) => {
                let formatted = ts.format("%Y-%m-%dT%H:%M:%SZ").to_string();
                self.path
                    .extend(utf8_percent_encode(&formatted, PATH_SEGMENT));
            },
            None => self.path.push_str("latest"),
        }
        self
    }

    fn push_pair(&mut self, name: &str, value: &str) {
        if !self.query.is_empty() {
            self.query.push('&');
        }
        self.query.push_str(name);
        self.query.push('=');
        self.query.push_str(value);
    }

    /// Appends a query pair, percent-encoding the value.
    pub fn query(mut self, name: &str, value: &str) -> Self {
        let encoded: String = utf8_percent_encode(value, QUERY_VALUE).collect();
        self.push_pair(name, &encoded);
        self
    }

    /// Appends a required identifier query value (trimmed, lower-cased).
    pub fn query_ident(
        self,
        name: &'static str,
        value: &str,
    ) -> Result<Self, CovalentError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(CovalentError::MissingParameter(name));
        }
        Ok(self.query(name, &value.to_lowercase()))
    }

    /// Appends an optional identifier query value; blank input is omitted.
    pub fn query_ident_opt(self, name: &str, value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(value) if !value.is_empty() => self.query(name, &value.to_lowercase()),
            _ => self,
        }
    }

    /// Appends a comma-joined list query value; an all-blank list emits
    /// nothing rather than an empty delimiter sequence.
    pub fn query_list<S: AsRef<str>>(self, name: &str, values: &[S]) -> Self {
        match join_list(values) {
            Some(joined) => self.query(name, &joined),
            None => self,
        }
    }

    /// Appends a calendar-date query pair when the caller supplied one.
    pub fn query_day(self, name: &str, day: Option<NaiveDate>) -> Self {
        match day {
            Some(day) => {
                let formatted = day.format("%Y-%m-%d").to_string();
                self.query(name, &formatted)
            },
            None => self,
        }
    }

    pub fn query_u64(mut self, name: &str, value: u64) -> Self {
        self.push_pair(name, &value.to_string());
        self
    }

    pub fn query_u64_opt(self, name: &str, value: Option<u64>) -> Self {
        match value {
            Some(value) => self.query_u64(name, value),
            None => self,
        }
    }

    /// Emits `name=true` when the flag is set; unset flags are omitted.
    pub fn flag(self, name: &str, enabled: bool) -> Self {
        if enabled {
            self.query(name, "true")
        } else {
            self
        }
    }

    /// Emits the endpoint's `...-asc` toggle when a sort order was given.
    pub fn sort(self, name: &str, order: Option<SortOrder>) -> Self {
        match order {
            Some(order) => self.query(name, order.asc_flag()),
            None => self,
        }
    }

    /// Validates the credential, appends the Primer pass-through pairs and
    /// the common trailing parameters, and returns the assembled request.
    pub fn finish(mut self, common: &CommonOptions) -> Result<ResolvedRequest, CovalentError> {
        let api_key = resolve_api_key(common.api_key.as_deref(), self.config)?;
        trace!(endpoint = self.spec.name; "API key present");

        let encoded_key: String = utf8_percent_encode(api_key, QUERY_VALUE).collect();
        let mut query = format!("key={encoded_key}");
        if !self.query.is_empty() {
            query.push('&');
            query.push_str(&self.query);
        }
        self.query = query;

        // Primer pairs follow the endpoint-specific parameters and precede
        // the fixed trailing block.
        for (name, value) in &common.primer {
            let encoded_name: String = utf8_percent_encode(name, QUERY_VALUE).collect();
            let encoded_value: String = utf8_percent_encode(value, QUERY_VALUE).collect();
            self.push_pair(&encoded_name, &encoded_value);
        }

        if self.spec.pagination
            && let Some(page) = common.page
        {
            self = self
                .query_u64("page-number", page.page_number())
                .query_u64("page-size", page.page_size());
        }

        if self.spec.currency == CurrencyRule::Query
            && let Some(currency) = common.quote_currency.or(self.config.quote_currency)
        {
            self = self.query("quote-currency", &currency.url_value());
        }

        // An explicit format is always sent; a configured default is only
        // sent when it departs from the service-side JSON default.
        let format = common.format.or_else(|| {
            self.config
                .format
                .filter(|format| *format == OutputFormat::Csv)
        });
        if let Some(format) = format {
            self = self.query("format", format.url_value());
        }

        let base = self.config.base_url.as_str().trim_end_matches('/');
        let assembled = format!("{base}{}/?{}", self.path, self.query);
        let url = Url::parse(&assembled)?;

        Ok(ResolvedRequest {
            url,
            method: Method::GET,
            content_type: "application/json",
        })
    }
}
