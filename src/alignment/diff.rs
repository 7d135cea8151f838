use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DiffTag {
    Equal,
    Replace,
    Insert,
    Delete,
}

/// One span of the opcode chain. `expected` and `hypothesis` index into the
/// respective input slices; for `Insert` the expected range is empty, for
/// `Delete` the hypothesis range is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DiffOp {
    pub(crate) tag: DiffTag,
    pub(crate) expected: Range<usize>,
    pub(crate) hypothesis: Range<usize>,
}

/// Longest-common-subsequence diff over two word sequences.
///
/// Returns a chain of ops covering both inputs end to end, in order. Adjacent
/// matched words collapse into a single `Equal` span; each gap between
/// matches becomes exactly one `Replace`, `Insert`, or `Delete` span.
pub(crate) fn diff_opcodes(expected: &[&str], hypothesis: &[&str]) -> Vec<DiffOp> {
    let matches = lcs_matches(expected, hypothesis);

    let mut ops = Vec::new();
    let mut i = 0usize;
    let mut j = 0usize;
    let mut k = 0usize;
    while k < matches.len() {
        let (mi, mj) = matches[k];
        push_gap(&mut ops, i..mi, j..mj);

        // Collapse the run of consecutive matches into one Equal span.
        let mut end = k;
        while end + 1 < matches.len()
            && matches[end + 1] == (matches[end].0 + 1, matches[end].1 + 1)
        {
            end += 1;
        }
        ops.push(DiffOp {
            tag: DiffTag::Equal,
            expected: mi..matches[end].0 + 1,
            hypothesis: mj..matches[end].1 + 1,
        });
        i = matches[end].0 + 1;
        j = matches[end].1 + 1;
        k = end + 1;
    }
    push_gap(&mut ops, i..expected.len(), j..hypothesis.len());
    ops
}

fn push_gap(ops: &mut Vec<DiffOp>, expected: Range<usize>, hypothesis: Range<usize>) {
    let tag = match (expected.is_empty(), hypothesis.is_empty()) {
        (true, true) => return,
        (false, false) => DiffTag::Replace,
        (false, true) => DiffTag::Delete,
        (true, false) => DiffTag::Insert,
    };
    ops.push(DiffOp {
        tag,
        expected,
        hypothesis,
    });
}

/// Matched index pairs of a longest common subsequence, in order.
///
/// Flat DP table indexed `[i * (m + 1) + j]`, filled back to front so the
/// forward walk can prefer advancing on the expected side for ties, which
/// keeps the op chain deterministic.
fn lcs_matches(expected: &[&str], hypothesis: &[&str]) -> Vec<(usize, usize)> {
    let n = expected.len();
    let m = hypothesis.len();
    if n == 0 || m == 0 {
        return Vec::new();
    }

    let stride = m + 1;
    let mut dp = vec![0u32; (n + 1) * stride];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            dp[i * stride + j] = if expected[i] == hypothesis[j] {
                dp[(i + 1) * stride + j + 1] + 1
            } else {
                dp[(i + 1) * stride + j].max(dp[i * stride + j + 1])
            };
        }
    }

    let mut matches = Vec::with_capacity(dp[0] as usize);
    let mut i = 0usize;
    let mut j = 0usize;
    while i < n && j < m {
        if expected[i] == hypothesis[j] {
            matches.push((i, j));
            i += 1;
            j += 1;
        } else if dp[(i + 1) * stride + j] >= dp[i * stride + j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    matches
}
