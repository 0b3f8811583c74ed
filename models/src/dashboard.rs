// models/src/dashboard.rs
use serde::{Deserialize, Serialize};

/// Counters shown on the dashboard, computed from the store on demand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_patients: usize,
    pub total_doctors: usize,
    pub todays_appointments: usize,
    /// Currently defined as the total patient count.
    pub active_cases: usize,
}

/// Percentage-change badges next to each counter. These are static display
/// configuration, not derived from historical data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendIndicators {
    pub patients_pct: i32,
    pub doctors_pct: i32,
    pub todays_appointments_pct: i32,
    pub active_cases_pct: i32,
}

impl Default for TrendIndicators {
    fn default() -> Self {
        TrendIndicators {
            patients_pct: 12,
            doctors_pct: 5,
            todays_appointments_pct: -8,
            active_cases_pct: 15,
        }
    }
}

/// One rendered dashboard tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DashboardCard {
    pub title: &'static str,
    pub value: usize,
    pub trend_pct: i32,
}

impl DashboardSummary {
    /// Pair each counter with its trend badge, in display order.
    pub fn cards(&self, trends: &TrendIndicators) -> [DashboardCard; 4] {
        [
            DashboardCard {
                title: "Total Patients",
                value: self.total_patients,
                trend_pct: trends.patients_pct,
            },
            DashboardCard {
                title: "Total Doctors",
                value: self.total_doctors,
                trend_pct: trends.doctors_pct,
            },
            DashboardCard {
                title: "Today's Appointments",
                value: self.todays_appointments,
                trend_pct: trends.todays_appointments_pct,
            },
            DashboardCard {
                title: "Active Cases",
                value: self.active_cases,
                trend_pct: trends.active_cases_pct,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{DashboardSummary, TrendIndicators};

    #[test]
    fn default_trends_are_static_display_values() {
        let trends = TrendIndicators::default();
        assert_eq!(trends.patients_pct, 12);
        assert_eq!(trends.doctors_pct, 5);
        assert_eq!(trends.todays_appointments_pct, -8);
        assert_eq!(trends.active_cases_pct, 15);
    }

    #[test]
    fn cards_keep_display_order() {
        let summary = DashboardSummary {
            total_patients: 3,
            total_doctors: 2,
            todays_appointments: 1,
            active_cases: 3,
        };
        let cards = summary.cards(&TrendIndicators::default());
        assert_eq!(cards[0].title, "Total Patients");
        assert_eq!(cards[0].value, 3);
        assert_eq!(cards[2].title, "Today's Appointments");
        assert_eq!(cards[2].trend_pct, -8);
        assert_eq!(cards[3].value, 3);
    }
}
