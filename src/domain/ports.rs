pub trait ConfigProvider: Send + Sync {
    fn verbose(&self) -> bool;
    fn wait_on_exit(&self) -> bool;
}
