#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Feed,
    Jobs,
    Network,
    Notifications,
    Settings,
}
