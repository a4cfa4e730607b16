const MIN_SIMILAR_LEN: usize = 3;
const SHARED_PREFIX_LEN: usize = 3;
const MAX_EDIT_RATIO: f64 = 0.25;

/// Near-match test used to grant partial credit.
///
/// Words shorter than three characters never qualify. Otherwise a word is
/// similar when one contains the other, when both share their first three
/// characters, or when fewer than a quarter of the longer word's characters
/// need editing.
pub fn is_similar(word1: &str, word2: &str) -> bool {
    let len1 = word1.chars().count();
    let len2 = word2.chars().count();
    if len1 < MIN_SIMILAR_LEN || len2 < MIN_SIMILAR_LEN {
        return false;
    }

    if word1.contains(word2) || word2.contains(word1) {
        return true;
    }

    if word1.chars().take(SHARED_PREFIX_LEN).eq(word2.chars().take(SHARED_PREFIX_LEN)) {
        return true;
    }

    let distance = levenshtein_distance(word1, word2);
    let longest = len1.max(len2);
    (distance as f64 / longest as f64) < MAX_EDIT_RATIO
}

/// Classic edit distance with unit-cost insert, delete, and substitute,
/// computed over a full `(m + 1) x (n + 1)` matrix of Unicode scalar values.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    let mut matrix = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            let delete = matrix[i - 1][j] + 1;
            let insert = matrix[i][j - 1] + 1;
            let substitute = matrix[i - 1][j - 1] + cost;
            matrix[i][j] = delete.min(insert).min(substitute);
        }
    }

    matrix[m][n]
}
