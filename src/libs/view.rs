use super::formatter::format_seconds;
use crate::api::{LeaderboardData, UserInfo};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn leaderboard(data: &LeaderboardData) {
        let mut table = Table::new();

        table.add_row(row!["RANK", "NICKNAME", "TOTAL TIME"]);
        for entry in &data.leaderboard {
            table.add_row(row![entry.rank, entry.nickname, format_seconds(entry.total_duration)]);
        }
        table.printstd();
    }

    pub fn user_info(user: &UserInfo) {
        let mut table = Table::new();

        table.add_row(row!["NICKNAME", "RANK", "TOTAL TIME"]);
        table.add_row(row![user.nickname, user.rank, format_seconds(user.total_duration)]);
        table.printstd();
    }
}
