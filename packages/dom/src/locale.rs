//! Read-only views over a loaded localeSet tree.
//!
//! These answer the questions a form renderer asks of a locale: which date
//! pattern is "medium", what is the abbreviated name of March, which symbol
//! separates decimals.

use std::fmt;

use crate::error::{DomError, Result};
use crate::schema::ElementKind;
use crate::tree::{Document, Node, NodeId};

/// Pattern length selected by the `name` attribute of a pattern element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternStyle {
    Full,
    Long,
    #[default]
    Med,
    Short,
}

impl PatternStyle {
    pub const ALL: [PatternStyle; 4] = [Self::Full, Self::Long, Self::Med, Self::Short];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Long => "long",
            Self::Med => "med",
            Self::Short => "short",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|style| style.name() == name)
    }
}

impl fmt::Display for PatternStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// View over the root `<localeSet>` of a document.
#[derive(Debug, Clone, Copy)]
pub struct LocaleSet<'a> {
    doc: &'a Document,
    root: NodeId,
}

impl<'a> LocaleSet<'a> {
    /// # Errors
    /// `MissingRoot` when the document root is absent or not a `<localeSet>`.
    pub fn new(doc: &'a Document) -> Result<Self> {
        let root = doc
            .root()
            .filter(|id| doc.node(*id).map(Node::kind) == Some(ElementKind::LocaleSet))
            .ok_or(DomError::MissingRoot(ElementKind::LocaleSet))?;
        Ok(Self { doc, root })
    }

    /// All locales in document order.
    pub fn locales(&self) -> impl Iterator<Item = Locale<'a>> + 'a {
        let doc = self.doc;
        doc.children_of_kind(self.root, ElementKind::Locale)
            .map(move |id| Locale { doc, id })
    }

    /// First locale whose `name` attribute matches.
    #[must_use]
    pub fn locale(&self, name: &str) -> Option<Locale<'a>> {
        self.locales().find(|locale| locale.name() == Some(name))
    }
}

/// View over one `<locale>` element.
#[derive(Debug, Clone, Copy)]
pub struct Locale<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> Locale<'a> {
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        self.doc.node(self.id).and_then(Node::name)
    }

    #[must_use]
    pub fn description(&self) -> Option<&'a str> {
        self.doc.node(self.id).and_then(|node| node.attribute("desc"))
    }

    #[must_use]
    pub fn date_pattern(&self, style: PatternStyle) -> Option<&'a str> {
        self.named_value(ElementKind::DatePatterns, ElementKind::DatePattern, style.name())
    }

    #[must_use]
    pub fn time_pattern(&self, style: PatternStyle) -> Option<&'a str> {
        self.named_value(ElementKind::TimePatterns, ElementKind::TimePattern, style.name())
    }

    /// Number pattern by name (`numeric`, `currency`, `percent`, ...).
    #[must_use]
    pub fn number_pattern(&self, name: &str) -> Option<&'a str> {
        self.named_value(ElementKind::NumberPatterns, ElementKind::NumberPattern, name)
    }

    /// Number symbol by name (`decimal`, `grouping`, `percent`, `minus`, `zero`).
    #[must_use]
    pub fn number_symbol(&self, name: &str) -> Option<&'a str> {
        self.named_value(ElementKind::NumberSymbols, ElementKind::NumberSymbol, name)
    }

    /// Currency symbol by name (`symbol`, `isoname`, `decimal`).
    #[must_use]
    pub fn currency_symbol(&self, name: &str) -> Option<&'a str> {
        self.named_value(ElementKind::CurrencySymbols, ElementKind::CurrencySymbol, name)
    }

    /// The localized date/time pattern symbol string.
    #[must_use]
    pub fn date_time_symbols(&self) -> Option<&'a str> {
        self.doc
            .first_child_of_kind(self.id, ElementKind::DateTimeSymbols)
            .and_then(|id| self.value(id))
    }

    /// Month name, `index` 0 = January.
    #[must_use]
    pub fn month_name(&self, index: usize, abbreviated: bool) -> Option<&'a str> {
        self.name_list(ElementKind::MonthNames, abbreviated)
            .and_then(|list| self.nth_value(list, index))
    }

    /// Day name, `index` 0 = Sunday.
    #[must_use]
    pub fn day_name(&self, index: usize, abbreviated: bool) -> Option<&'a str> {
        self.name_list(ElementKind::DayNames, abbreviated)
            .and_then(|list| self.nth_value(list, index))
    }

    /// AM or PM marker.
    #[must_use]
    pub fn meridiem_name(&self, pm: bool) -> Option<&'a str> {
        self.calendar_child(ElementKind::MeridiemNames)
            .and_then(|list| self.nth_value(list, usize::from(pm)))
    }

    /// BC or AD marker.
    #[must_use]
    pub fn era_name(&self, ad: bool) -> Option<&'a str> {
        self.calendar_child(ElementKind::EraNames)
            .and_then(|list| self.nth_value(list, usize::from(ad)))
    }

    fn calendar_child(&self, kind: ElementKind) -> Option<NodeId> {
        let calendar = self
            .doc
            .first_child_of_kind(self.id, ElementKind::CalendarSymbols)?;
        self.doc.first_child_of_kind(calendar, kind)
    }

    /// Pick the full (`abbr` absent or `"0"`) or abbreviated (`abbr="1"`) list.
    fn name_list(&self, kind: ElementKind, abbreviated: bool) -> Option<NodeId> {
        let calendar = self
            .doc
            .first_child_of_kind(self.id, ElementKind::CalendarSymbols)?;
        self.doc.children_of_kind(calendar, kind).find(|id| {
            let abbr = self
                .doc
                .node(*id)
                .and_then(|node| node.attribute("abbr"))
                .unwrap_or("0");
            (abbr == "1") == abbreviated
        })
    }

    fn named_value(
        &self,
        container: ElementKind,
        item: ElementKind,
        name: &str,
    ) -> Option<&'a str> {
        let container = self.doc.first_child_of_kind(self.id, container)?;
        self.doc
            .children_of_kind(container, item)
            .find(|id| self.doc.node(*id).and_then(Node::name) == Some(name))
            .and_then(|id| self.value(id))
    }

    fn nth_value(&self, list: NodeId, index: usize) -> Option<&'a str> {
        self.doc
            .children(list)
            .get(index)
            .and_then(|id| self.value(*id))
    }

    fn value(&self, id: NodeId) -> Option<&'a str> {
        self.doc.node(id).and_then(Node::value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{load_str, LoadOptions};
    use crate::schema::PacketKind;

    const XML: &str = r#"<localeSet xmlns="http://www.xfa.org/schema/xfa-locale-set/2.7/">
  <locale name="nl_NL" desc="Dutch (Netherlands)">
    <calendarSymbols name="gregorian">
      <monthNames>
        <month>januari</month><month>februari</month><month>maart</month>
      </monthNames>
      <monthNames abbr="1">
        <month>jan</month><month>feb</month><month>mrt</month>
      </monthNames>
      <dayNames>
        <day>zondag</day><day>maandag</day>
      </dayNames>
      <meridiemNames><meridiem>AM</meridiem><meridiem>PM</meridiem></meridiemNames>
      <eraNames><era>v. Chr.</era><era>n. Chr.</era></eraNames>
    </calendarSymbols>
    <datePatterns>
      <datePattern name="full">EEEE D MMMM YYYY</datePattern>
      <datePattern name="med">D MMM YYYY</datePattern>
    </datePatterns>
    <numberSymbols>
      <numberSymbol name="decimal">,</numberSymbol>
      <numberSymbol name="grouping">.</numberSymbol>
    </numberSymbols>
    <currencySymbols><currencySymbol name="symbol">€</currencySymbol></currencySymbols>
  </locale>
  <locale name="en_US"/>
</localeSet>"#;

    fn doc() -> Document {
        load_str(XML, &LoadOptions::new().strict()).unwrap().document
    }

    #[test]
    fn test_locales() {
        let doc = doc();
        let set = LocaleSet::new(&doc).unwrap();
        let names: Vec<_> = set.locales().filter_map(|l| l.name()).collect();
        assert_eq!(names, vec!["nl_NL", "en_US"]);
        assert!(set.locale("fr_FR").is_none());
    }

    #[test]
    fn test_patterns() {
        let doc = doc();
        let set = LocaleSet::new(&doc).unwrap();
        let nl = set.locale("nl_NL").unwrap();

        assert_eq!(nl.description(), Some("Dutch (Netherlands)"));
        assert_eq!(nl.date_pattern(PatternStyle::Med), Some("D MMM YYYY"));
        assert_eq!(nl.date_pattern(PatternStyle::Short), None);
        assert_eq!(nl.time_pattern(PatternStyle::Med), None);
        assert_eq!(nl.number_symbol("decimal"), Some(","));
        assert_eq!(nl.currency_symbol("symbol"), Some("€"));
    }

    #[test]
    fn test_calendar_names() {
        let doc = doc();
        let set = LocaleSet::new(&doc).unwrap();
        let nl = set.locale("nl_NL").unwrap();

        assert_eq!(nl.month_name(2, false), Some("maart"));
        assert_eq!(nl.month_name(2, true), Some("mrt"));
        assert_eq!(nl.month_name(11, false), None);
        assert_eq!(nl.day_name(1, false), Some("maandag"));
        assert_eq!(nl.day_name(1, true), None);
        assert_eq!(nl.meridiem_name(true), Some("PM"));
        assert_eq!(nl.era_name(true), Some("n. Chr."));
    }

    #[test]
    fn test_empty_locale() {
        let doc = doc();
        let set = LocaleSet::new(&doc).unwrap();
        let en = set.locale("en_US").unwrap();
        assert_eq!(en.date_pattern(PatternStyle::Full), None);
        assert_eq!(en.month_name(0, false), None);
        assert_eq!(en.date_time_symbols(), None);
    }

    #[test]
    fn test_locale_set_requires_root() {
        let doc = Document::new(PacketKind::LocaleSet);
        assert!(LocaleSet::new(&doc).is_err());
    }

    #[test]
    fn test_pattern_style_names() {
        for style in PatternStyle::ALL {
            assert_eq!(PatternStyle::from_name(style.name()), Some(style));
        }
        assert_eq!(PatternStyle::from_name("medium"), None);
        assert_eq!(PatternStyle::default(), PatternStyle::Med);
    }
}
