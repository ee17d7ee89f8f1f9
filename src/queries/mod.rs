pub mod monthly_queries;
pub mod standings_queries;

pub use monthly_queries::{
    daily_totals, monthly_totals, recruiter_monthly_totals, roster_monthly_totals, DailyStat,
    MonthlyStat,
};
pub use standings_queries::{
    campaign_summary, gap_to_leader, leader, rank_of, ranking, CampaignSummary, Standing,
};
