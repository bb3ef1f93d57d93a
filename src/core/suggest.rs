//! "Did you mean" suggestions for mistyped keywords

/// Suggestions are only offered below this edit distance
pub const SUGGESTION_THRESHOLD: usize = 3;

/// Find the option closest to `input` by Levenshtein distance.
///
/// Distance is measured over Unicode scalar values, so a multi-byte
/// character counts as a single edit. The best option is returned only when
/// its distance is strictly below [`SUGGESTION_THRESHOLD`]; ties go to the
/// lexicographically smallest option.
pub fn suggest_closest<I, S>(input: &str, options: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut best: Option<(usize, String)> = None;

    for option in options {
        let option = option.as_ref();
        let distance = strsim::levenshtein(input, option);
        if distance >= SUGGESTION_THRESHOLD {
            continue;
        }

        let better = match &best {
            None => true,
            Some((best_distance, best_option)) => {
                distance < *best_distance
                    || (distance == *best_distance && option < best_option.as_str())
            }
        };
        if better {
            best = Some((distance, option.to_string()));
        }
    }

    best.map(|(_, option)| option)
}
