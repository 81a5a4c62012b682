use comfy_table::Color;

use super::format::{create_styled_table, header_cell, styled_cell};
use crate::core::HistoryList;

pub(crate) const EMPTY_HISTORY: &str = "目前沒有打卡紀錄。";

pub(crate) fn render_history_table(history: &HistoryList, use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("#", use_color),
        header_cell("電子郵件", use_color),
        header_cell("時間", use_color),
    ]);

    for (i, record) in history.records().iter().enumerate() {
        let color = (use_color && i == 0).then_some(Color::Green);
        table.add_row(vec![
            styled_cell(&(i + 1).to_string(), None, false),
            styled_cell(&record.email, color, i == 0),
            styled_cell(&record.timestamp, None, false),
        ]);
    }

    format!("\n  最近紀錄\n\n{table}\n")
}
