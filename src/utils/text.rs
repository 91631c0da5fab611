/// Title-case a creature name: the first letter of every run of letters is
/// upper-cased and the rest lower-cased, so `mr-mime` becomes `Mr-Mime`.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                result.extend(ch.to_uppercase());
            } else {
                result.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }

    result
}
