use chrono::Utc;

/// Issues ids for newly added entries.
///
/// Ids are creation timestamps in milliseconds, bumped so they are strictly
/// increasing and never equal to an id already present in the target list.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id<'a, I>(&mut self, existing: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let taken: Vec<&str> = existing.into_iter().collect();
        let mut candidate = Utc::now().timestamp_millis().max(self.last + 1);
        while taken.contains(&candidate.to_string().as_str()) {
            candidate += 1;
        }
        self.last = candidate;
        candidate.to_string()
    }
}
