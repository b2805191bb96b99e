//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for dashboard integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use dashboard_lib::{create_app_state, AppState, DashboardConfig, RenderedDashboard, RenderedView, SessionId};
use tempfile::TempDir;

/// Small two-table sales dataset.
///
/// Joined on Order ID, B-5 has no order row and is dropped:
/// - Amount 1050, Profit 15, Quantity 11, 4 orders, 5 records
/// - Profit by Sub-Category: Chairs 30, Tables 30, Phones -45
/// - Amount by State: Texas 450, Utah 400, Ohio 200
/// - Amount by Customer: Ana 450, Mia 400, Raj 200
pub struct SalesFixture;

impl SalesFixture {
    pub fn details_csv() -> &'static str {
        "\
Order ID,Amount,Profit,Quantity,Category,Sub-Category,PaymentMode
B-1,100,10,1,Furniture,Chairs,UPI
B-1,50,-5,2,Electronics, Phones ,UPI
B-2,200,20,3,Furniture,Chairs,COD
B-3,300,30,1,Furniture,Tables,EMI
B-4,400,-40,4,Electronics,Phones,COD
B-5,999,99,9,Furniture,Chairs,COD
"
    }

    pub fn orders_csv() -> &'static str {
        "\
Order ID,Order Date,CustomerName,State,City
B-1,01-04-2018,Ana,Texas,Austin
B-2,01-04-2018,Raj,Ohio,Dayton
B-3,02-04-2018,Ana,Texas,Dallas
B-4,03-04-2018,Mia,Utah,Provo
"
    }

    /// Writes both tables into `dir` and returns their paths.
    pub fn write(dir: &TempDir) -> (PathBuf, PathBuf) {
        let details = dir.path().join("Details.csv");
        let orders = dir.path().join("Orders.csv");
        fs::write(&details, Self::details_csv()).unwrap();
        fs::write(&orders, Self::orders_csv()).unwrap();
        (details, orders)
    }
}

/// Test harness for creating and managing test state.
pub struct TestHarness {
    pub state: AppState,
    pub dir: TempDir,
}

impl TestHarness {
    /// Harness over the sales fixture with the default configuration.
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    pub fn with_adapter(name: &str) -> Self {
        Self::with_config(DashboardConfig {
            adapter: name.to_string(),
            ..DashboardConfig::default()
        })
    }

    /// Uses `config` with its source paths pointed at the fixture files.
    pub fn with_config(mut config: DashboardConfig) -> Self {
        let dir = TempDir::new().unwrap();
        let (details, orders) = SalesFixture::write(&dir);
        config.details_path = details;
        config.orders_path = orders;
        let state = create_app_state(config).ok().expect("fixture state");
        TestHarness { state, dir }
    }

    /// Harness whose orders file does not exist.
    pub fn without_data() -> Self {
        let dir = TempDir::new().unwrap();
        let (details, _) = SalesFixture::write(&dir);
        let config = DashboardConfig {
            details_path: details,
            orders_path: dir.path().join("Missing.csv"),
            ..DashboardConfig::default()
        };
        let state = create_app_state(config).ok().expect("state without data");
        TestHarness { state, dir }
    }

    pub fn open(&self) -> SessionId {
        self.state.open_session().expect("session")
    }

    pub fn click(&self, id: SessionId, dimension: &str, category: &str) -> Option<String> {
        self.state
            .handle_event(id, &dashboard_lib::InteractionEvent::click(dimension, category))
            .map(|c| c.message())
    }

    pub fn rendered(&self, id: SessionId) -> RenderedDashboard {
        match self.state.render(id) {
            RenderedView::Ready(dashboard) => dashboard,
            RenderedView::NoData { reason } => panic!("no data: {}", reason),
        }
    }
}
