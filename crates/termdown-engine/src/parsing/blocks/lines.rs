/// Splits input into lines on `\n`, dropping a trailing `\r` from each.
///
/// Like `str::split`, an empty input yields one empty line and a trailing
/// newline yields a final empty line; both are blank and produce nothing.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Takes lines from `start` while `keep(index, line)` holds.
///
/// Returns the consumed lines and the index of the first line not consumed.
pub fn consume_run<'l, 's>(
    lines: &'l [&'s str],
    start: usize,
    mut keep: impl FnMut(usize, &'s str) -> bool,
) -> (&'l [&'s str], usize) {
    let mut end = start.min(lines.len());
    while end < lines.len() && keep(end, lines[end]) {
        end += 1;
    }
    (&lines[start.min(end)..end], end)
}
