/// Plain limit/offset pagination for list queries.
#[derive(Debug, Clone, Copy)]
pub struct LimitOffset {
    pub limit: i64,
    pub offset: i64,
}

impl Default for LimitOffset {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

impl LimitOffset {
    /// Clamp client-supplied values into a sane window.
    pub fn clamped(limit: Option<i64>, offset: Option<i64>) -> Self {
        let default = Self::default();
        Self {
            limit: limit.unwrap_or(default.limit).clamp(1, 200),
            offset: offset.unwrap_or(default.offset).max(0),
        }
    }
}
