//! # 模板解析与展开
//!
//! 将自定义模板一次性切分为片段，再按文件逐个渲染。
//!
//! ## 占位符语法
//! - `{filename}`: 原文件名（不含扩展名）
//! - `{num}` / `{num:<pad>}`: 序号；`pad` 中第一段连续 `0` 的长度为最小位数
//! - `{date}` / `{date:<fmt>}`: 日期；`fmt` 支持 `%Y %m %d %H %M %S`
//!
//! 占位符内容截止于第一个 `}`。无法识别的内容按字面保留，
//! 并从 `{` 的下一个字符继续扫描。替换结果不会被再次解析。
//!
//! ## 依赖关系
//! - 被 `naming/generator.rs` 调用
//! - 使用 `chrono` 读取日期字段

use chrono::{Datelike, NaiveDateTime, Timelike};

/// 模板片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// 字面文本
    Literal(String),
    /// `{filename}`
    Filename,
    /// `{num}`，可选最小位数
    Number { width: Option<usize> },
    /// `{date}`，`None` 为默认 YYYYMMDD
    Date { format: Option<String> },
}

/// 已解析的模板
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// 解析模板字符串（不会失败，畸形占位符保留为字面文本）
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            let after_open = &rest[open + 1..];

            let placeholder = after_open
                .find('}')
                .and_then(|close| parse_placeholder(&after_open[..close]).map(|s| (s, close)));

            match placeholder {
                Some((segment, close)) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                    rest = &after_open[close + 1..];
                }
                None => {
                    literal.push('{');
                    rest = after_open;
                }
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// 为单个文件渲染模板
    pub fn render(&self, filename: &str, number: u32, now: &NaiveDateTime) -> String {
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Filename => out.push_str(filename),
                Segment::Number { width } => out.push_str(&format_number(number, *width)),
                Segment::Date { format } => match format {
                    Some(fmt) => out.push_str(&format_date(fmt, now)),
                    None => out.push_str(&default_date(now)),
                },
            }
        }

        out
    }
}

/// 解析 `{` 与 `}` 之间的内容
fn parse_placeholder(inner: &str) -> Option<Segment> {
    if inner == "filename" {
        return Some(Segment::Filename);
    }

    if inner == "num" {
        return Some(Segment::Number { width: None });
    }
    if let Some(pad) = inner.strip_prefix("num:") {
        return Some(Segment::Number {
            width: pad_width(pad),
        });
    }

    if inner == "date" {
        return Some(Segment::Date { format: None });
    }
    if let Some(fmt) = inner.strip_prefix("date:") {
        let format = (!fmt.is_empty()).then(|| fmt.to_string());
        return Some(Segment::Date { format });
    }

    None
}

/// 补零位数：全为数字时取整体长度（`001` → 3），
/// 混合内容取第一段连续 `0` 的长度；不含 `0` 时不补零
fn pad_width(pad: &str) -> Option<usize> {
    let start = pad.find('0')?;
    if pad.chars().all(|c| c.is_ascii_digit()) {
        return Some(pad.chars().count());
    }
    Some(pad[start..].chars().take_while(|&c| c == '0').count())
}

/// 序号补零到指定位数
pub fn format_number(number: u32, width: Option<usize>) -> String {
    match width {
        Some(w) => format!("{:0width$}", number, width = w),
        None => number.to_string(),
    }
}

fn default_date(now: &NaiveDateTime) -> String {
    format!("{}{:02}{:02}", now.year(), now.month(), now.day())
}

/// 按受限的 strftime 子集格式化日期，其余 `%` 序列原样保留
pub fn format_date(fmt: &str, now: &NaiveDateTime) -> String {
    let mut out = String::new();
    let mut chars = fmt.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let field = match chars.peek() {
            Some('Y') => Some(now.year().to_string()),
            Some('m') => Some(format!("{:02}", now.month())),
            Some('d') => Some(format!("{:02}", now.day())),
            Some('H') => Some(format!("{:02}", now.hour())),
            Some('M') => Some(format!("{:02}", now.minute())),
            Some('S') => Some(format!("{:02}", now.second())),
            _ => None,
        };

        match field {
            Some(value) => {
                out.push_str(&value);
                chars.next();
            }
            None => out.push('%'),
        }
    }

    out
}
