// Row-level classifiers: Half Board detection and market segmentation
// from rate codes.
use std::fmt;

/// True when the product description mentions a Half Board meal plan,
/// spelled either `Halfboard` or `Half Board`, in any letter case.
/// A missing description is simply not Half Board.
pub fn classify_half_board(description: Option<&str>) -> bool {
    let Some(d) = description else {
        return false;
    };
    let lower = d.to_lowercase();
    lower.contains("halfboard") || lower.contains("half board")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MarketSegment {
    Unknown,
    CisMarkets,
    Luxembourg,
    UniversalMultiMarket,
    SpecificMarket,
    SecretEscapes,
    DesertGate,
    ExpressQuick,
    Other,
}

impl MarketSegment {
    pub fn label(self) -> &'static str {
        match self {
            MarketSegment::Unknown => "Unknown",
            MarketSegment::CisMarkets => "CIS Markets",
            MarketSegment::Luxembourg => "Luxembourg",
            MarketSegment::UniversalMultiMarket => "Universal/Multi-Market",
            MarketSegment::SpecificMarket => "Specific Market",
            MarketSegment::SecretEscapes => "Secret Escapes",
            MarketSegment::DesertGate => "Desert Gate",
            MarketSegment::ExpressQuick => "Express/Quick",
            MarketSegment::Other => "Other",
        }
    }
}

impl fmt::Display for MarketSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

type CodeRule = (fn(&str) -> bool, MarketSegment);

// Evaluated top to bottom against the upper-cased code; the first hit wins.
// Substrings overlap ("TOEXDG" matches both DG and EX), so order matters.
static SEGMENT_RULES: &[CodeRule] = &[
    (|c: &str| c.contains("CIS"), MarketSegment::CisMarkets),
    (|c: &str| c.contains("MILUX"), MarketSegment::Luxembourg),
    (
        |c: &str| c.contains("BBWI") || c.contains("BBJN") || c.contains("BB-WI") || c == "TOBB",
        MarketSegment::UniversalMultiMarket,
    ),
    (|c: &str| c.contains("ROWI"), MarketSegment::SpecificMarket),
    (|c: &str| c.contains("SSE") || c.contains("FSSE"), MarketSegment::SecretEscapes),
    (|c: &str| c.contains("DG"), MarketSegment::DesertGate),
    (|c: &str| c.contains("EX"), MarketSegment::ExpressQuick),
];

/// Map a rate code onto its market segment. Total: every input, including
/// a missing code, yields exactly one segment. Only a missing code is
/// `Unknown`; the code is matched as given, without trimming.
pub fn classify_market_segment(rate_code: Option<&str>) -> MarketSegment {
    let Some(code) = rate_code else {
        return MarketSegment::Unknown;
    };
    let upper = code.to_uppercase();
    SEGMENT_RULES
        .iter()
        .find(|(matches, _)| matches(&upper))
        .map(|(_, segment)| *segment)
        .unwrap_or(MarketSegment::Other)
}
