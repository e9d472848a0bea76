// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// Statistics collected during one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Number of worker threads used during the run.
    pub workers: usize,
    /// Total next-prime advancements performed across all workers.
    pub advancements: u64,
    /// Total duration of the run.
    pub elapsed: std::time::Duration,
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Workers: {}", self.workers)?;
        writeln!(f, "  Next-Prime Advancements: {}", self.advancements)?;
        write!(f, "  Elapsed (secs): {:.3}", self.elapsed.as_secs_f64())
    }
}

/// Builder for `SearchStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatisticsBuilder {
    workers: usize,
    advancements: u64,
    elapsed: std::time::Duration,
}

impl Default for SearchStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatisticsBuilder {
    /// Creates a new `SearchStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            workers: 1,
            advancements: 0,
            elapsed: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of workers used.
    #[inline]
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the total number of next-prime advancements.
    #[inline]
    pub fn advancements(mut self, advancements: u64) -> Self {
        self.advancements = advancements;
        self
    }

    /// Sets the total elapsed duration.
    #[inline]
    pub fn elapsed(mut self, elapsed: std::time::Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Builds the `SearchStatistics` instance.
    #[inline]
    pub fn build(self) -> SearchStatistics {
        SearchStatistics {
            workers: self.workers,
            advancements: self.advancements,
            elapsed: self.elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SearchStatistics;
    use super::SearchStatisticsBuilder;
    use std::time::Duration;

    #[test]
    fn test_builder_defaults() {
        let stats = SearchStatisticsBuilder::new().build();
        assert_eq!(
            stats,
            SearchStatistics {
                workers: 1,
                advancements: 0,
                elapsed: Duration::ZERO,
            }
        );
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let stats = SearchStatisticsBuilder::new()
            .workers(8)
            .advancements(50_847_534)
            .elapsed(Duration::from_millis(1500))
            .build();
        assert_eq!(stats.workers, 8);
        assert_eq!(stats.advancements, 50_847_534);
        assert_eq!(stats.elapsed, Duration::from_millis(1500));
    }

    #[test]
    fn test_display_report() {
        let stats = SearchStatisticsBuilder::new()
            .workers(4)
            .advancements(25)
            .elapsed(Duration::from_millis(250))
            .build();
        let report = stats.to_string();
        assert!(report.contains("Workers: 4"));
        assert!(report.contains("Next-Prime Advancements: 25"));
        assert!(report.contains("Elapsed (secs): 0.250"));
    }
}
