//! Texel-encoded solver dispatched on a kernel substrate.

use std::fmt;

use relax_core::{Backend, FieldReader, IterationId};
use relax_field::{Carrier, CarrierPair, Field, Frame};
use relax_space::Torus;

use crate::kernel::{InitKernel, UpdateKernel};
use crate::solver::Solver;
use crate::substrate::KernelSubstrate;

/// The accelerated backend.
///
/// Values live in a [`CarrierPair`] of byte-encoded texels. Construction
/// runs an [`InitKernel`] pass into `src`. Each step runs an
/// [`UpdateKernel`] pass from `src` into `dst` on the substrate, then
/// swaps the pair. Values are quantised by the codec after every step,
/// so results track the software backend within codec tolerance rather
/// than exactly.
pub struct AcceleratedSolver {
    name: String,
    carriers: CarrierPair,
    substrate: Box<dyn KernelSubstrate>,
    iteration: IterationId,
}

impl AcceleratedSolver {
    /// Initialise a carrier over `torus` from the source regions.
    pub fn new(torus: Torus, substrate: Box<dyn KernelSubstrate>) -> Self {
        let mut carriers = CarrierPair::blank(torus);
        substrate.run_init(&InitKernel::default(), carriers.src_mut());
        Self::with_carriers(carriers, substrate)
    }

    /// Start from an explicit native field, encoded once.
    pub fn from_field(field: &Field, substrate: Box<dyn KernelSubstrate>) -> Self {
        Self::with_carriers(CarrierPair::seeded(Carrier::from_field(field)), substrate)
    }

    fn with_carriers(carriers: CarrierPair, substrate: Box<dyn KernelSubstrate>) -> Self {
        Self {
            name: format!("accelerated/{}", substrate.name()),
            carriers,
            substrate,
            iteration: IterationId::default(),
        }
    }

    /// The carrier holding the latest completed iteration.
    pub fn carrier(&self) -> &Carrier {
        self.carriers.src()
    }
}

impl fmt::Debug for AcceleratedSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AcceleratedSolver")
            .field("substrate", &self.substrate.name())
            .field("grid_size", &self.carrier().grid_size())
            .field("iteration", &self.iteration)
            .finish()
    }
}

impl Solver for AcceleratedSolver {
    fn name(&self) -> &str {
        &self.name
    }

    fn backend(&self) -> Backend {
        Backend::Accelerated
    }

    fn iteration(&self) -> IterationId {
        self.iteration
    }

    fn step(&mut self) {
        let (src, dst) = self.carriers.split_mut();
        self.substrate.run_update(&UpdateKernel, src, dst);
        self.carriers.swap();
        self.iteration = self.iteration.next();
    }

    fn readable_field(&self) -> &dyn FieldReader {
        self.carriers.src()
    }

    fn frame(&self) -> Frame {
        Frame::from_carrier(self.carriers.src())
    }
}
