/// Title-case a string: the first letter of every alphabetic run is upper-cased and the
/// rest are lower-cased. Non-alphabetic characters start a new run.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_alpha = false;

    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(c);
            prev_is_alpha = false;
        }
    }

    out
}

pub fn is_title_case(input: &str) -> bool {
    title_case(input) == input
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_case_words_are_title_cased() {
        assert_eq!(title_case("sEns fOrTrESs"), "Sens Fortress");
        assert_eq!(title_case("anor londo"), "Anor Londo");
    }

    #[test]
    fn digits_and_punctuation_start_new_words() {
        assert_eq!(title_case("location 1"), "Location 1");
        assert_eq!(title_case("blight-town"), "Blight-Town");
        assert_eq!(title_case("3rd gate"), "3Rd Gate");
    }

    #[test]
    fn already_titled_input_is_untouched() {
        assert!(is_title_case("Firelink Shrine"));
        assert!(!is_title_case("firelink Shrine"));
        assert!(is_title_case("Location 12"));
    }
}
