//! Line-oriented templates for emitting detector source code.
//!
//! Syntax
//! - `{{name}}` is replaced by a value. Globals: `radius`, `boundary_len`,
//!   `interior_len`, `first_y`, `first_x` (first boundary pixel).
//! - A line whose trimmed text starts with `//@` is a directive and is not
//!   copied to the output:
//!   - `//@ for boundary`, `//@ for interior`, optionally `from N`, repeat
//!     the following lines once per pixel of that list starting at index `N`;
//!   - `//@ end` closes the block.
//!   Inside a block `i` (index in the full list), `y` and `x` are also set.
//!   Blocks do not nest.

use std::fmt;

use fimd::{Pixel, Plan};

const DIRECTIVE: &str = "//@";

/// Built-in template for the CPU detector.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/fimd_cpu.c.tmpl");

#[derive(Debug, PartialEq, Eq)]
pub enum TemplateError {
    UnknownPlaceholder { line: usize, name: String },
    UnterminatedPlaceholder { line: usize },
    UnknownList { line: usize, name: String },
    MalformedDirective { line: usize, text: String },
    NestedBlock { line: usize },
    UnmatchedEnd { line: usize },
    UnclosedBlock { line: usize },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPlaceholder { line, name } => {
                write!(f, "line {line}: unknown placeholder `{{{{{name}}}}}`")
            }
            Self::UnterminatedPlaceholder { line } => {
                write!(f, "line {line}: `{{{{` without closing `}}}}`")
            }
            Self::UnknownList { line, name } => {
                write!(f, "line {line}: unknown list `{name}` (expected boundary or interior)")
            }
            Self::MalformedDirective { line, text } => {
                write!(f, "line {line}: malformed directive `{text}`")
            }
            Self::NestedBlock { line } => write!(f, "line {line}: blocks cannot nest"),
            Self::UnmatchedEnd { line } => write!(f, "line {line}: `end` without an open block"),
            Self::UnclosedBlock { line } => write!(f, "line {line}: block is never closed"),
        }
    }
}

impl std::error::Error for TemplateError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum List {
    Boundary,
    Interior,
}

#[derive(Debug, PartialEq, Eq)]
enum Directive {
    For { list: List, from: usize },
    End,
}

/// Values visible to a template.
pub struct Context<'a> {
    pub radius: i32,
    pub boundary: &'a [Pixel],
    pub interior: &'a [Pixel],
}

impl<'a> From<&'a Plan> for Context<'a> {
    fn from(plan: &'a Plan) -> Self {
        Self {
            radius: plan.radius,
            boundary: &plan.boundary,
            interior: &plan.interior,
        }
    }
}

impl Context<'_> {
    fn list(&self, list: List) -> &[Pixel] {
        match list {
            List::Boundary => self.boundary,
            List::Interior => self.interior,
        }
    }

    fn global(&self, name: &str) -> Option<String> {
        match name {
            "radius" => Some(self.radius.to_string()),
            "boundary_len" => Some(self.boundary.len().to_string()),
            "interior_len" => Some(self.interior.len().to_string()),
            "first_y" => self.boundary.first().map(|p| p.row.to_string()),
            "first_x" => self.boundary.first().map(|p| p.col.to_string()),
            _ => None,
        }
    }
}

/// Per-pixel values inside a block.
struct Item {
    index: usize,
    pixel: Pixel,
}

impl Item {
    fn get(&self, name: &str) -> Option<String> {
        match name {
            "i" => Some(self.index.to_string()),
            "y" => Some(self.pixel.row.to_string()),
            "x" => Some(self.pixel.col.to_string()),
            _ => None,
        }
    }
}

/// Expand `template` against `ctx`.
pub fn render(template: &str, ctx: &Context<'_>) -> Result<String, TemplateError> {
    let lines: Vec<&str> = template.split_inclusive('\n').collect();
    let mut out = String::with_capacity(template.len());
    let mut k = 0;
    while k < lines.len() {
        let line_no = k + 1;
        match parse_directive(lines[k], line_no)? {
            None => {
                out.push_str(&substitute(lines[k], line_no, ctx, None)?);
                k += 1;
            }
            Some(Directive::End) => return Err(TemplateError::UnmatchedEnd { line: line_no }),
            Some(Directive::For { list, from }) => {
                let body_start = k + 1;
                let mut body_end = body_start;
                loop {
                    let Some(&body_line) = lines.get(body_end) else {
                        return Err(TemplateError::UnclosedBlock { line: line_no });
                    };
                    match parse_directive(body_line, body_end + 1)? {
                        None => body_end += 1,
                        Some(Directive::End) => break,
                        Some(Directive::For { .. }) => {
                            return Err(TemplateError::NestedBlock { line: body_end + 1 })
                        }
                    }
                }
                for (index, &pixel) in ctx.list(list).iter().enumerate().skip(from) {
                    let item = Item { index, pixel };
                    for (j, body_line) in lines[body_start..body_end].iter().enumerate() {
                        out.push_str(&substitute(body_line, body_start + j + 1, ctx, Some(&item))?);
                    }
                }
                k = body_end + 1;
            }
        }
    }
    Ok(out)
}

fn parse_directive(line: &str, line_no: usize) -> Result<Option<Directive>, TemplateError> {
    let Some(rest) = line.trim().strip_prefix(DIRECTIVE) else {
        return Ok(None);
    };
    let malformed = || TemplateError::MalformedDirective {
        line: line_no,
        text: line.trim().to_string(),
    };
    let words: Vec<&str> = rest.split_whitespace().collect();
    match words.as_slice() {
        ["end"] => Ok(Some(Directive::End)),
        ["for", name, tail @ ..] => {
            let list = match *name {
                "boundary" => List::Boundary,
                "interior" => List::Interior,
                other => {
                    return Err(TemplateError::UnknownList {
                        line: line_no,
                        name: other.to_string(),
                    })
                }
            };
            let from = match tail {
                [] => 0,
                ["from", n] => n.parse().map_err(|_| malformed())?,
                _ => return Err(malformed()),
            };
            Ok(Some(Directive::For { list, from }))
        }
        _ => Err(malformed()),
    }
}

fn substitute(
    line: &str,
    line_no: usize,
    ctx: &Context<'_>,
    item: Option<&Item>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let close = after
            .find("}}")
            .ok_or(TemplateError::UnterminatedPlaceholder { line: line_no })?;
        let name = after[..close].trim();
        let value = item
            .and_then(|it| it.get(name))
            .or_else(|| ctx.global(name))
            .ok_or_else(|| TemplateError::UnknownPlaceholder {
                line: line_no,
                name: name.to_string(),
            })?;
        out.push_str(&value);
        rest = &after[close + 2..];
    }
    out.push_str(rest);
    Ok(out)
}
