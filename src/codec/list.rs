use crate::qso::Credit;

/// Splits `IOTA,WAS` into its elements. Empty text is an empty list.
pub fn parse_awards(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(',').map(str::to_string).collect()
}

/// Joins awards with commas.
pub fn join_awards(awards: &[String]) -> String {
    awards.join(",")
}

/// Splits `CQ:CARD,DXCC` into credits, each split on its first colon.
///
/// ```
/// use qsobridge::{codec::list::parse_credits, qso::Credit};
///
/// let credits = parse_credits("CQ:CARD,DXCC");
/// assert_eq!(credits[0], Credit { credit: "CQ".into(), qsl_medium: "CARD".into() });
/// assert_eq!(credits[1], Credit { credit: "DXCC".into(), qsl_medium: String::new() });
/// ```
pub fn parse_credits(text: &str) -> Vec<Credit> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(',')
        .map(|element| {
            let (credit, medium) = element.split_once(':').unwrap_or((element, ""));
            Credit {
                credit: credit.to_string(),
                qsl_medium: medium.to_string(),
            }
        })
        .collect()
}

/// Joins credits, appending `:medium` only when a medium is set.
pub fn join_credits(credits: &[Credit]) -> String {
    credits
        .iter()
        .map(|c| {
            if c.qsl_medium.is_empty() {
                c.credit.clone()
            } else {
                format!("{}:{}", c.credit, c.qsl_medium)
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
