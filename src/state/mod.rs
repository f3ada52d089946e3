mod dashboard;
#[cfg(test)]
mod tests;

pub use dashboard::DashboardState;
