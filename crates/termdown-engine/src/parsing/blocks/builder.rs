use crate::parsing::{
    inline::parse_inline,
    table::{parse_table, starts_table},
};

use super::{
    kinds::{
        BlockQuote, CodeFence, Heading, HtmlComment, ListItem, Paragraph, StandaloneImage,
        ThematicBreak,
    },
    lines::consume_run,
    types::Element,
};

/// What a rule did with the lines at the cursor. `next` is always past the
/// cursor, so every rule that fires consumes at least one line.
#[derive(Debug)]
enum Step {
    Skip { next: usize },
    Emit { element: Element, next: usize },
}

type Rule = fn(&[&str], usize) -> Option<Step>;

/// Block rules in priority order; the first that fires wins.
const RULES: [(&str, Rule); 11] = [
    ("blank", blank),
    ("comment", comment_line),
    ("comment-block", comment_block),
    ("table", table),
    ("heading", heading),
    ("thematic-break", thematic_break),
    ("code-fence", code_fence),
    ("blockquote", blockquote),
    ("list", list),
    ("image", image),
    ("paragraph", paragraph),
];

/// Drives a single forward cursor over `lines`, appending one element per
/// recognized block to `out`.
pub struct BlockBuilder<'a> {
    lines: &'a [&'a str],
    i: usize,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self { lines, i: 0 }
    }

    pub fn run(mut self, out: &mut Vec<Element>) {
        while self.i < self.lines.len() {
            self.i = self.step(out);
        }
    }

    fn step(&self, out: &mut Vec<Element>) -> usize {
        let (lines, i) = (self.lines, self.i);
        let fired = RULES
            .iter()
            .find_map(|(name, rule)| rule(lines, i).map(|step| (*name, step)));

        match fired {
            Some((_, Step::Skip { next })) => next,
            Some((name, Step::Emit { element, next })) => {
                log::trace!("{name} consumed lines {i}..{next}");
                debug_assert!(next > i, "{name} did not advance");
                out.push(element);
                next
            }
            None => {
                log::debug!("line {i} matched no block rule, keeping it as text");
                out.push(Element::Text(lines[i].to_string()));
                i + 1
            }
        }
    }
}

fn emit(element: Element, next: usize) -> Option<Step> {
    Some(Step::Emit { element, next })
}

fn blank(lines: &[&str], i: usize) -> Option<Step> {
    lines[i]
        .trim()
        .is_empty()
        .then_some(Step::Skip { next: i + 1 })
}

fn comment_line(lines: &[&str], i: usize) -> Option<Step> {
    let text = HtmlComment::single_line(lines[i])?;
    emit(Element::Comment(text.to_string()), i + 1)
}

fn comment_block(lines: &[&str], i: usize) -> Option<Step> {
    if !HtmlComment::opens_block(lines[i]) {
        return None;
    }
    let (text, next, closed) = HtmlComment::consume_block(lines, i);
    if !closed {
        log::debug!("comment opened on line {i} is never closed, running to end of input");
    }
    emit(Element::Comment(text), next)
}

fn table(lines: &[&str], i: usize) -> Option<Step> {
    if !starts_table(lines[i], lines.get(i + 1).copied()) {
        return None;
    }
    let (table, next) = parse_table(lines, i)?;
    emit(Element::Table(table), next)
}

fn heading(lines: &[&str], i: usize) -> Option<Step> {
    let (level, text) = Heading::parse(lines[i])?;
    emit(
        Element::Heading {
            level,
            content: parse_inline(text),
        },
        i + 1,
    )
}

fn thematic_break(lines: &[&str], i: usize) -> Option<Step> {
    let kind = ThematicBreak::parse(lines[i])?;
    emit(Element::ThematicBreak(kind), i + 1)
}

fn code_fence(lines: &[&str], i: usize) -> Option<Step> {
    if !CodeFence::is_fence(lines[i]) {
        return None;
    }
    let language = CodeFence::language(lines[i]);
    let (body, end) = consume_run(lines, i + 1, |_, line| !CodeFence::is_fence(line));
    let next = if end < lines.len() {
        end + 1
    } else {
        log::debug!("code fence opened on line {i} is never closed, running to end of input");
        end
    };
    emit(
        Element::CodeBlock {
            code: body.join("\n"),
            language,
        },
        next,
    )
}

fn blockquote(lines: &[&str], i: usize) -> Option<Step> {
    BlockQuote::strip_prefix(lines[i])?;
    let (run, next) = consume_run(lines, i, |_, line| {
        BlockQuote::strip_prefix(line).is_some()
    });
    let text = run
        .iter()
        .filter_map(|line| BlockQuote::strip_prefix(line))
        .collect::<Vec<_>>()
        .join(" ");
    emit(Element::Blockquote(parse_inline(&text)), next)
}

fn list(lines: &[&str], i: usize) -> Option<Step> {
    let kind = ListItem::kind_of(lines[i])?;
    let (run, next) = consume_run(lines, i, |_, line| ListItem::item(kind, line).is_some());
    let items = run
        .iter()
        .filter_map(|line| ListItem::item(kind, line))
        .map(parse_inline)
        .collect();
    emit(Element::List { kind, items }, next)
}

fn image(lines: &[&str], i: usize) -> Option<Step> {
    let (alt, url) = StandaloneImage::parse(lines[i])?;
    emit(
        Element::Image {
            alt: parse_inline(alt),
            url: url.to_string(),
        },
        i + 1,
    )
}

fn paragraph(lines: &[&str], i: usize) -> Option<Step> {
    let (run, next) = consume_run(lines, i, |j, _| !Paragraph::interrupted_at(lines, j));
    if run.is_empty() {
        return None;
    }
    emit(Element::Paragraph(parse_inline(&run.join(" "))), next)
}
