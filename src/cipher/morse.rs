use itertools::Itertools;

const TABLE: [(char, &str); 37] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    (' ', "/"),
];

/// Unmapped characters are emitted literally as their own token.
pub(super) fn encode(text: &str) -> String {
    text.to_uppercase()
        .chars()
        .map(|c| match TABLE.iter().find(|(plain, _)| *plain == c) {
            Some((_, code)) => (*code).to_string(),
            None => c.to_string(),
        })
        .join(" ")
}

/// Tokens are separated by single spaces; unknown tokens pass through.
pub(super) fn decode(text: &str) -> String {
    text.split(' ')
        .map(|token| match TABLE.iter().find(|(_, code)| *code == token) {
            Some((plain, _)) => plain.to_string(),
            None => token.to_string(),
        })
        .collect()
}
