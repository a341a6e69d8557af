//! Configuration for list decoding

use log::warn;

/// How the list decoder spreads factorization over interpolation candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDecoderConfig {
    /// Worker threads for the global pool, 0 picks one per available core
    pub threads: usize,
    /// Factor kernel basis vectors on rayon instead of one after another
    pub parallel: bool,
}

impl Default for ListDecoderConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            parallel: true,
        }
    }
}

impl ListDecoderConfig {
    pub fn new(threads: usize, parallel: bool) -> Self {
        Self { threads, parallel }
    }

    /// Factor candidates one at a time on the calling thread
    pub fn sequential() -> Self {
        Self::new(1, false)
    }

    /// Read `--threads` and `--no-parallel` from a `run` or `scenarios` invocation
    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let threads = matches.get_one::<usize>("threads").copied().unwrap_or(0);
        Self::new(threads, !matches.get_flag("no-parallel"))
    }

    /// Pool size the decoder will run candidates on
    ///
    /// Sequential decoding needs one thread whatever `threads` says.
    pub fn effective_threads(&self) -> usize {
        if !self.parallel {
            return 1;
        }
        if self.threads > 0 {
            return self.threads;
        }
        std::thread::available_parallelism()
            .map(|cores| cores.get())
            .unwrap_or(1)
    }

    /// Size the global rayon pool; a pool that is already built is left as is
    pub fn configure_thread_pool(&self) {
        let threads = self.effective_threads();
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .unwrap_or_else(|_| {
                warn!(
                    "Could not set thread count to {}, using the existing pool",
                    threads
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_parallel_auto_detect() {
        let config = ListDecoderConfig::default();
        assert_eq!(config.threads, 0);
        assert!(config.parallel);
        assert!(config.effective_threads() >= 1);
    }

    #[test]
    fn test_sequential_uses_one_thread() {
        assert_eq!(ListDecoderConfig::sequential().effective_threads(), 1);
        assert_eq!(ListDecoderConfig::new(8, false).effective_threads(), 1);
    }

    #[test]
    fn test_explicit_thread_count() {
        assert_eq!(ListDecoderConfig::new(3, true).effective_threads(), 3);
    }

    #[test]
    fn test_from_args() {
        let matches = crate::args::build_cli()
            .try_get_matches_from(["rsdecode", "scenarios", "--threads", "3", "--no-parallel"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(ListDecoderConfig::from_args(sub), ListDecoderConfig::new(3, false));

        let matches = crate::args::build_cli()
            .try_get_matches_from(["rsdecode", "scenarios"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(ListDecoderConfig::from_args(sub), ListDecoderConfig::default());
    }
}
