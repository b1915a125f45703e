//! Identifiers for element kinds, packets and object categories.

use std::fmt;

use serde::Serialize;

/// Schema type of a node.
///
/// `Unknown` is the sentinel that terminates every property table. It is
/// also what [`ElementKind::from_name`] returns for unrecognised names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    LocaleSet,
    Locale,
    CalendarSymbols,
    DayNames,
    Day,
    MonthNames,
    Month,
    EraNames,
    Era,
    MeridiemNames,
    Meridiem,
    DatePatterns,
    DatePattern,
    TimePatterns,
    TimePattern,
    DateTimeSymbols,
    NumberPatterns,
    NumberPattern,
    NumberSymbols,
    NumberSymbol,
    CurrencySymbols,
    CurrencySymbol,
    Unknown,
}

impl ElementKind {
    /// Every constructible kind, in schema order.
    pub const ALL: [ElementKind; 22] = [
        Self::LocaleSet,
        Self::Locale,
        Self::CalendarSymbols,
        Self::DayNames,
        Self::Day,
        Self::MonthNames,
        Self::Month,
        Self::EraNames,
        Self::Era,
        Self::MeridiemNames,
        Self::Meridiem,
        Self::DatePatterns,
        Self::DatePattern,
        Self::TimePatterns,
        Self::TimePattern,
        Self::DateTimeSymbols,
        Self::NumberPatterns,
        Self::NumberPattern,
        Self::NumberSymbols,
        Self::NumberSymbol,
        Self::CurrencySymbols,
        Self::CurrencySymbol,
    ];

    /// XML element name for this kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LocaleSet => "localeSet",
            Self::Locale => "locale",
            Self::CalendarSymbols => "calendarSymbols",
            Self::DayNames => "dayNames",
            Self::Day => "day",
            Self::MonthNames => "monthNames",
            Self::Month => "month",
            Self::EraNames => "eraNames",
            Self::Era => "era",
            Self::MeridiemNames => "meridiemNames",
            Self::Meridiem => "meridiem",
            Self::DatePatterns => "datePatterns",
            Self::DatePattern => "datePattern",
            Self::TimePatterns => "timePatterns",
            Self::TimePattern => "timePattern",
            Self::DateTimeSymbols => "dateTimeSymbols",
            Self::NumberPatterns => "numberPatterns",
            Self::NumberPattern => "numberPattern",
            Self::NumberSymbols => "numberSymbols",
            Self::NumberSymbol => "numberSymbol",
            Self::CurrencySymbols => "currencySymbols",
            Self::CurrencySymbol => "currencySymbol",
            Self::Unknown => "unknown",
        }
    }

    /// Map an XML element name to its kind.
    ///
    /// Names are case-sensitive, as in XFA. Anything unrecognised maps to
    /// `Unknown`, including the literal name `"unknown"`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .unwrap_or(Self::Unknown)
    }

    /// Whether this is the sentinel kind.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Logical section of an XDP document a node may appear in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PacketKind {
    Xdp,
    Config,
    Template,
    Datasets,
    Form,
    LocaleSet,
    ConnectionSet,
    SourceSet,
    Xdc,
    Pdf,
    Signature,
    Stylesheet,
    Xfdf,
}

impl PacketKind {
    pub const ALL: [PacketKind; 13] = [
        Self::Xdp,
        Self::Config,
        Self::Template,
        Self::Datasets,
        Self::Form,
        Self::LocaleSet,
        Self::ConnectionSet,
        Self::SourceSet,
        Self::Xdc,
        Self::Pdf,
        Self::Signature,
        Self::Stylesheet,
        Self::Xfdf,
    ];

    /// Packet name as it appears in an XDP stream.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Xdp => "xdp",
            Self::Config => "config",
            Self::Template => "template",
            Self::Datasets => "datasets",
            Self::Form => "form",
            Self::LocaleSet => "localeSet",
            Self::ConnectionSet => "connectionSet",
            Self::SourceSet => "sourceSet",
            Self::Xdc => "xdc",
            Self::Pdf => "pdf",
            Self::Signature => "signature",
            Self::Stylesheet => "stylesheet",
            Self::Xfdf => "xfdf",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|packet| packet.name() == name)
    }

    /// Namespace URI of the packet's root element, where this crate knows it.
    #[must_use]
    pub fn namespace(&self) -> Option<&'static str> {
        match self {
            Self::LocaleSet => Some(crate::config::LOCALE_SET_NAMESPACE),
            _ => None,
        }
    }
}

impl fmt::Display for PacketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Object category of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectCategory {
    /// Plain container node.
    Node,
    /// Root node of a packet model.
    ModelNode,
    /// Leaf node whose content is a single string value.
    ContentNode,
    /// Leaf node holding mixed text.
    TextNode,
}

impl ObjectCategory {
    /// Whether nodes of this category carry a text value.
    #[must_use]
    pub fn holds_value(&self) -> bool {
        matches!(self, Self::ContentNode | Self::TextNode)
    }
}
