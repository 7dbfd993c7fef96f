pub struct DefaultsConfig {
    pub dataset_path: String,
    pub strict: bool,
    pub precision: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            dataset_path: "elements.json".to_string(),
            strict: true,
            precision: 3,
        }
    }
}
