//! Static element specifications for the localeSet packet.
//!
//! The localeSet schema:
//!
//! ```text
//! localeSet
//! └── locale (any number)
//!     ├── calendarSymbols
//!     │   ├── dayNames (x2: full, abbreviated) ── day (x7)
//!     │   ├── monthNames (x2) ── month (x12)
//!     │   ├── eraNames ── era (x2)
//!     │   └── meridiemNames ── meridiem (x2)
//!     ├── datePatterns ── datePattern (x4: full, long, med, short)
//!     ├── timePatterns ── timePattern (x4)
//!     ├── dateTimeSymbols
//!     ├── numberPatterns ── numberPattern (x4)
//!     ├── numberSymbols ── numberSymbol (x5)
//!     └── currencySymbols ── currencySymbol (x3)
//! ```

use super::kind::{ElementKind, ObjectCategory, PacketKind};
use super::table::{PropertyEntry, PropertyTable};

/// Declarative description of one element kind.
#[derive(Debug)]
pub struct ElementSpec {
    pub kind: ElementKind,
    pub category: ObjectCategory,
    /// Packets a node of this kind may be constructed in.
    pub packets: &'static [PacketKind],
    pub properties: PropertyTable,
    /// Attribute names the kind accepts.
    pub attributes: &'static [&'static str],
}

impl ElementSpec {
    #[must_use]
    pub fn valid_in(&self, packet: PacketKind) -> bool {
        self.packets.contains(&packet)
    }

    /// Whether the kind accepts `name`. Attributes in the `xml:` namespace are
    /// accepted everywhere.
    #[must_use]
    pub fn accepts_attribute(&self, name: &str) -> bool {
        name.starts_with("xml:")
            || COMMON_ATTRIBUTES.contains(&name)
            || self.attributes.contains(&name)
    }
}

/// Attributes every XFA node accepts.
pub const COMMON_ATTRIBUTES: &[&str] = &["id", "use", "usehref"];

const LOCALE_SET_ONLY: &[PacketKind] = &[PacketKind::LocaleSet];

const LEAF: PropertyTable = PropertyTable::new(&[PropertyEntry::SENTINEL]);

const fn leaf(kind: ElementKind, attributes: &'static [&'static str]) -> ElementSpec {
    ElementSpec {
        kind,
        category: ObjectCategory::ContentNode,
        packets: LOCALE_SET_ONLY,
        properties: LEAF,
        attributes,
    }
}

const fn container(kind: ElementKind, properties: PropertyTable) -> ElementSpec {
    ElementSpec {
        kind,
        category: ObjectCategory::Node,
        packets: LOCALE_SET_ONLY,
        properties,
        attributes: &[],
    }
}

static LOCALE_SET: ElementSpec = ElementSpec {
    kind: ElementKind::LocaleSet,
    category: ObjectCategory::ModelNode,
    packets: LOCALE_SET_ONLY,
    properties: PropertyTable::new(&[
        PropertyEntry::new(ElementKind::Locale, 0, 0),
        PropertyEntry::SENTINEL,
    ]),
    attributes: &[],
};

static LOCALE: ElementSpec = ElementSpec {
    kind: ElementKind::Locale,
    category: ObjectCategory::Node,
    packets: LOCALE_SET_ONLY,
    properties: PropertyTable::new(&[
        PropertyEntry::new(ElementKind::CalendarSymbols, 0, 1),
        PropertyEntry::new(ElementKind::DatePatterns, 0, 1),
        PropertyEntry::new(ElementKind::TimePatterns, 0, 1),
        PropertyEntry::new(ElementKind::DateTimeSymbols, 0, 1),
        PropertyEntry::new(ElementKind::NumberPatterns, 0, 1),
        PropertyEntry::new(ElementKind::NumberSymbols, 0, 1),
        PropertyEntry::new(ElementKind::CurrencySymbols, 0, 1),
        PropertyEntry::SENTINEL,
    ]),
    attributes: &["name", "desc"],
};

static CALENDAR_SYMBOLS: ElementSpec = ElementSpec {
    kind: ElementKind::CalendarSymbols,
    category: ObjectCategory::Node,
    packets: LOCALE_SET_ONLY,
    properties: PropertyTable::new(&[
        PropertyEntry::new(ElementKind::DayNames, 0, 2),
        PropertyEntry::new(ElementKind::MonthNames, 0, 2),
        PropertyEntry::new(ElementKind::EraNames, 0, 1),
        PropertyEntry::new(ElementKind::MeridiemNames, 0, 1),
        PropertyEntry::SENTINEL,
    ]),
    attributes: &["name"],
};

static DAY_NAMES: ElementSpec = ElementSpec {
    attributes: &["abbr"],
    ..container(
        ElementKind::DayNames,
        PropertyTable::new(&[
            PropertyEntry::new(ElementKind::Day, 0, 7),
            PropertyEntry::SENTINEL,
        ]),
    )
};

static MONTH_NAMES: ElementSpec = ElementSpec {
    attributes: &["abbr"],
    ..container(
        ElementKind::MonthNames,
        PropertyTable::new(&[
            PropertyEntry::new(ElementKind::Month, 0, 12),
            PropertyEntry::SENTINEL,
        ]),
    )
};

static ERA_NAMES: ElementSpec = container(
    ElementKind::EraNames,
    PropertyTable::new(&[
        PropertyEntry::new(ElementKind::Era, 0, 2),
        PropertyEntry::SENTINEL,
    ]),
);

static MERIDIEM_NAMES: ElementSpec = container(
    ElementKind::MeridiemNames,
    PropertyTable::new(&[
        PropertyEntry::new(ElementKind::Meridiem, 0, 2),
        PropertyEntry::SENTINEL,
    ]),
);

static DATE_PATTERNS: ElementSpec = container(
    ElementKind::DatePatterns,
    PropertyTable::new(&[
        PropertyEntry::new(ElementKind::DatePattern, 0, 4),
        PropertyEntry::SENTINEL,
    ]),
);

static TIME_PATTERNS: ElementSpec = container(
    ElementKind::TimePatterns,
    PropertyTable::new(&[
        PropertyEntry::new(ElementKind::TimePattern, 0, 4),
        PropertyEntry::SENTINEL,
    ]),
);

static NUMBER_PATTERNS: ElementSpec = container(
    ElementKind::NumberPatterns,
    PropertyTable::new(&[
        PropertyEntry::new(ElementKind::NumberPattern, 0, 4),
        PropertyEntry::SENTINEL,
    ]),
);

static NUMBER_SYMBOLS: ElementSpec = container(
    ElementKind::NumberSymbols,
    PropertyTable::new(&[
        PropertyEntry::new(ElementKind::NumberSymbol, 0, 5),
        PropertyEntry::SENTINEL,
    ]),
);

static CURRENCY_SYMBOLS: ElementSpec = container(
    ElementKind::CurrencySymbols,
    PropertyTable::new(&[
        PropertyEntry::new(ElementKind::CurrencySymbol, 0, 3),
        PropertyEntry::SENTINEL,
    ]),
);

static DAY: ElementSpec = leaf(ElementKind::Day, &[]);
static MONTH: ElementSpec = leaf(ElementKind::Month, &[]);
static ERA: ElementSpec = leaf(ElementKind::Era, &[]);
static MERIDIEM: ElementSpec = leaf(ElementKind::Meridiem, &[]);
static DATE_PATTERN: ElementSpec = leaf(ElementKind::DatePattern, &["name"]);
static TIME_PATTERN: ElementSpec = leaf(ElementKind::TimePattern, &["name"]);
static DATE_TIME_SYMBOLS: ElementSpec = leaf(ElementKind::DateTimeSymbols, &[]);
static NUMBER_PATTERN: ElementSpec = leaf(ElementKind::NumberPattern, &["name"]);
static NUMBER_SYMBOL: ElementSpec = leaf(ElementKind::NumberSymbol, &["name"]);
static CURRENCY_SYMBOL: ElementSpec = leaf(ElementKind::CurrencySymbol, &["name"]);

static UNKNOWN: ElementSpec = ElementSpec {
    kind: ElementKind::Unknown,
    category: ObjectCategory::Node,
    packets: &[],
    properties: LEAF,
    attributes: &[],
};

impl ElementKind {
    /// Static specification for this kind.
    #[must_use]
    pub fn spec(&self) -> &'static ElementSpec {
        match self {
            Self::LocaleSet => &LOCALE_SET,
            Self::Locale => &LOCALE,
            Self::CalendarSymbols => &CALENDAR_SYMBOLS,
            Self::DayNames => &DAY_NAMES,
            Self::Day => &DAY,
            Self::MonthNames => &MONTH_NAMES,
            Self::Month => &MONTH,
            Self::EraNames => &ERA_NAMES,
            Self::Era => &ERA,
            Self::MeridiemNames => &MERIDIEM_NAMES,
            Self::Meridiem => &MERIDIEM,
            Self::DatePatterns => &DATE_PATTERNS,
            Self::DatePattern => &DATE_PATTERN,
            Self::TimePatterns => &TIME_PATTERNS,
            Self::TimePattern => &TIME_PATTERN,
            Self::DateTimeSymbols => &DATE_TIME_SYMBOLS,
            Self::NumberPatterns => &NUMBER_PATTERNS,
            Self::NumberPattern => &NUMBER_PATTERN,
            Self::NumberSymbols => &NUMBER_SYMBOLS,
            Self::NumberSymbol => &NUMBER_SYMBOL,
            Self::CurrencySymbols => &CURRENCY_SYMBOLS,
            Self::CurrencySymbol => &CURRENCY_SYMBOL,
            Self::Unknown => &UNKNOWN,
        }
    }

    /// Property table of this kind.
    #[must_use]
    pub fn property_table(&self) -> PropertyTable {
        self.spec().properties
    }

    #[must_use]
    pub fn category(&self) -> ObjectCategory {
        self.spec().category
    }
}
