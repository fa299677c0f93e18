//! # 显示排序
//!
//! 按原文件名或新文件名进行自然排序（数字按数值比较，忽略大小写）。
//! 同一列重复排序时在升序/降序之间切换。
//!
//! 按新文件名排序时，先按当前顺序生成新文件名，再对 (索引, 新文件名)
//! 排序并重排列表，排序过程中不会重新分配序号。
//!
//! ## 依赖关系
//! - 被 `workspace.rs` 调用
//! - 使用 `naming/generator.rs` 生成排序键

use crate::models::{FileEntry, RenameMode, TemplateParameters};
use crate::naming::generator::generate_names;

use chrono::NaiveDateTime;
use clap::ValueEnum;
use std::cmp::Ordering;

/// 排序列
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortColumn {
    /// Sort by the original file name
    Original,
    /// Sort by the generated new name
    Converted,
}

/// 每列下一次排序的方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    original_ascending: bool,
    converted_ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            original_ascending: true,
            converted_ascending: true,
        }
    }
}

impl SortState {
    /// 取出该列本次的方向，并翻转下一次的方向
    pub fn toggle(&mut self, column: SortColumn) -> bool {
        let slot = match column {
            SortColumn::Original => &mut self.original_ascending,
            SortColumn::Converted => &mut self.converted_ascending,
        };
        let ascending = *slot;
        *slot = !ascending;
        ascending
    }
}

/// 按原文件名排序，返回新列表
pub fn sort_by_original(files: &[FileEntry], ascending: bool) -> Vec<FileEntry> {
    let mut sorted = files.to_vec();
    sorted.sort_by(|a, b| directed(natural_cmp(&a.base_name, &b.base_name), ascending));
    sorted
}

/// 按新文件名排序，返回新列表
pub fn sort_by_proposed(
    files: &[FileEntry],
    mode: RenameMode,
    params: &TemplateParameters,
    now: NaiveDateTime,
    ascending: bool,
) -> Vec<FileEntry> {
    let names = generate_names(files, mode, params, now);

    let mut indexed: Vec<(usize, &String)> = names.iter().enumerate().collect();
    indexed.sort_by(|a, b| directed(natural_cmp(a.1, b.1), ascending));

    indexed
        .into_iter()
        .map(|(index, _)| files[index].clone())
        .collect()
}

fn directed(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending {
        ordering
    } else {
        ordering.reverse()
    }
}

/// 自然排序比较：连续数字按数值比较，其余字符忽略大小写
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let lhs = take_digits(&mut left);
                let rhs = take_digits(&mut right);
                let ordering = compare_digit_runs(&lhs, &rhs);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(x), Some(y)) => {
                let ordering = x.to_lowercase().cmp(y.to_lowercase());
                if ordering != Ordering::Equal {
                    return ordering;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// 比较两段数字的数值大小（任意长度）
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn names(files: &[FileEntry]) -> Vec<&str> {
        files.iter().map(|f| f.base_name.as_str()).collect()
    }

    #[test]
    fn test_natural_cmp() {
        assert_eq!(natural_cmp("img2", "img10"), Ordering::Less);
        assert_eq!(natural_cmp("IMG10", "img2"), Ordering::Greater);
        assert_eq!(natural_cmp("Photo", "photo"), Ordering::Equal);
        assert_eq!(natural_cmp("a", "B"), Ordering::Less);
        assert_eq!(natural_cmp("file", "file1"), Ordering::Less);
        assert_eq!(natural_cmp("007", "7"), Ordering::Equal);
        assert_eq!(
            natural_cmp("99999999999999999999999", "100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn test_sort_by_original_is_pure() {
        let files: Vec<_> = ["/d/img10.jpg", "/d/IMG2.jpg", "/d/img1.jpg"]
            .iter()
            .map(|p| FileEntry::from_path(*p))
            .collect();

        let ascending = sort_by_original(&files, true);
        assert_eq!(names(&ascending), vec!["img1", "IMG2", "img10"]);

        let descending = sort_by_original(&files, false);
        assert_eq!(names(&descending), vec!["img10", "IMG2", "img1"]);

        assert_eq!(names(&files), vec!["img10", "IMG2", "img1"]);
    }

    #[test]
    fn test_sort_by_proposed_uses_current_numbering() {
        // 当前顺序下: zebra_001, apple_002, mango_003
        let files: Vec<_> = ["/d/zebra.jpg", "/d/apple.jpg", "/d/mango.jpg"]
            .iter()
            .map(|p| FileEntry::from_path(*p))
            .collect();
        let params = TemplateParameters::default();

        let sorted = sort_by_proposed(&files, RenameMode::SerialSuffix, &params, clock(), true);
        assert_eq!(names(&sorted), vec!["apple", "mango", "zebra"]);

        // 序号模式下，按新文件名降序即反转当前顺序
        let reversed = sort_by_proposed(&files, RenameMode::SerialOnly, &params, clock(), false);
        assert_eq!(names(&reversed), vec!["mango", "apple", "zebra"]);
    }

    #[test]
    fn test_sort_state_toggles_per_column() {
        let mut state = SortState::default();
        assert!(state.toggle(SortColumn::Original));
        assert!(!state.toggle(SortColumn::Original));
        assert!(state.toggle(SortColumn::Converted));
        assert!(state.toggle(SortColumn::Original));
        assert!(!state.toggle(SortColumn::Original));
        assert!(!state.toggle(SortColumn::Converted));
    }
}
