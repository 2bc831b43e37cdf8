//! Execution facilities for the accelerated backend.
//!
//! A [`KernelSubstrate`] evaluates a kernel for every texel of a carrier.
//! Two implementations are provided:
//!
//! - [`SequentialSubstrate`]: one texel at a time on the calling thread.
//! - [`ParallelSubstrate`]: rows of the output carrier written
//!   concurrently on a dedicated rayon pool, joined before returning.
//!
//! Update passes always read `src` and write a distinct `dst`, so the
//! evaluation order cannot affect the result.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use relax_core::SubstrateError;
use relax_field::Carrier;
use tracing::debug;

use crate::kernel::{InitKernel, UpdateKernel};

/// A facility that runs per-texel kernels over a whole carrier.
pub trait KernelSubstrate: Send {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Write `kernel`'s output for every texel of `dst`.
    fn run_init(&self, kernel: &InitKernel, dst: &mut Carrier);

    /// Write `kernel`'s output for every texel of `dst`, reading `src`.
    ///
    /// `src` and `dst` must share a torus.
    fn run_update(&self, kernel: &UpdateKernel, src: &Carrier, dst: &mut Carrier);
}

/// Single-threaded substrate with strict double buffering.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialSubstrate;

impl KernelSubstrate for SequentialSubstrate {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn run_init(&self, kernel: &InitKernel, dst: &mut Carrier) {
        let torus = *dst.torus();
        for (index, out) in dst.texels_mut().iter_mut().enumerate() {
            *out = kernel.shade(&torus, index);
        }
    }

    fn run_update(&self, kernel: &UpdateKernel, src: &Carrier, dst: &mut Carrier) {
        debug_assert_eq!(src.torus(), dst.torus());
        for (index, out) in dst.texels_mut().iter_mut().enumerate() {
            *out = kernel.shade(src, index);
        }
    }
}

/// Data-parallel substrate backed by its own rayon thread pool.
pub struct ParallelSubstrate {
    pool: ThreadPool,
}

impl ParallelSubstrate {
    /// Start a pool with `threads` workers, or rayon's default count
    /// when `None`.
    ///
    /// Returns `Err(SubstrateError::Unavailable)` for `Some(0)` or when
    /// the pool cannot be started.
    pub fn new(threads: Option<usize>) -> Result<Self, SubstrateError> {
        let mut builder = ThreadPoolBuilder::new().thread_name(|i| format!("relax-kernel-{i}"));
        match threads {
            Some(0) => {
                return Err(SubstrateError::Unavailable {
                    reason: "thread count must be at least 1".to_string(),
                })
            }
            Some(n) => builder = builder.num_threads(n),
            None => {}
        }
        let pool = builder.build().map_err(|e| SubstrateError::Unavailable {
            reason: e.to_string(),
        })?;
        debug!(threads = pool.current_num_threads(), "parallel kernel substrate started");
        Ok(Self { pool })
    }

    /// Number of worker threads.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl std::fmt::Debug for ParallelSubstrate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelSubstrate")
            .field("threads", &self.threads())
            .finish()
    }
}

impl KernelSubstrate for ParallelSubstrate {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn run_init(&self, kernel: &InitKernel, dst: &mut Carrier) {
        let torus = *dst.torus();
        let n = torus.size();
        self.pool.install(|| {
            dst.texels_mut()
                .par_chunks_mut(n)
                .enumerate()
                .for_each(|(row, out)| {
                    for (col, texel) in out.iter_mut().enumerate() {
                        *texel = kernel.shade(&torus, row * n + col);
                    }
                });
        });
    }

    fn run_update(&self, kernel: &UpdateKernel, src: &Carrier, dst: &mut Carrier) {
        debug_assert_eq!(src.torus(), dst.torus());
        let n = src.torus().size();
        self.pool.install(|| {
            dst.texels_mut()
                .par_chunks_mut(n)
                .enumerate()
                .for_each(|(row, out)| {
                    for (col, texel) in out.iter_mut().enumerate() {
                        *texel = kernel.shade(src, row * n + col);
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relax_field::Field;
    use relax_space::Torus;

    #[test]
    fn zero_threads_is_unavailable() {
        assert!(matches!(
            ParallelSubstrate::new(Some(0)),
            Err(SubstrateError::Unavailable { .. })
        ));
    }

    #[test]
    fn explicit_thread_count() {
        let s = ParallelSubstrate::new(Some(2)).unwrap();
        assert_eq!(s.threads(), 2);
        assert_eq!(s.name(), "parallel");
    }

    #[test]
    fn parallel_matches_sequential_bytes() {
        let t = Torus::new(33).unwrap();
        let par = ParallelSubstrate::new(Some(3)).unwrap();
        let kernel = InitKernel::default();

        let mut a = Carrier::blank(t);
        let mut b = Carrier::blank(t);
        SequentialSubstrate.run_init(&kernel, &mut a);
        par.run_init(&kernel, &mut b);
        assert_eq!(a, b);
        assert_eq!(a, Carrier::from_field(&Field::classified(t)));

        let mut a2 = Carrier::blank(t);
        let mut b2 = Carrier::blank(t);
        SequentialSubstrate.run_update(&UpdateKernel, &a, &mut a2);
        par.run_update(&UpdateKernel, &b, &mut b2);
        assert_eq!(a2, b2);
    }
}
