//! Dashboard summary counts.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub vehicles: u64,
    pub dealerships: u64,
    pub service_bookings: u64,
    pub inquiries: u64,
    pub blog_posts: u64,
    pub weekly_specials: u64,
}

impl ApiClient {
    /// Fetch all six counts concurrently.
    ///
    /// All-or-nothing: if any count fails the whole batch fails and no figure
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns the first error among the six requests.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let (vehicles, dealerships, service_bookings, inquiries, blog_posts, weekly_specials) = futures::try_join!(
            self.get_data::<u64>("vehicles/totalVehical"),
            self.get_data::<u64>("dealerships/totalDealer"),
            self.get_data::<u64>("services/totalService"),
            self.get_data::<u64>("contact/totalContact"),
            self.get_data::<u64>("posts/totalPosts"),
            self.get_data::<u64>("weekly-specials/totalWeekly"),
        )?;
        Ok(DashboardStats {
            vehicles,
            dealerships,
            service_bookings,
            inquiries,
            blog_posts,
            weekly_specials,
        })
    }
}
