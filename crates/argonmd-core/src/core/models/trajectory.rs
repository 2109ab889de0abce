use nalgebra::DVector;

/// Recorded position snapshots across simulated timesteps.
///
/// Row `s` holds the positions of every particle immediately after step `s`'s
/// update, so the length always equals the number of completed steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    snapshots: Vec<DVector<f64>>,
}

impl Trajectory {
    pub fn with_capacity(number_of_steps: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(number_of_steps),
        }
    }

    pub(crate) fn push(&mut self, positions: DVector<f64>) {
        self.snapshots.push(positions);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Positions recorded after the given step, if it was run.
    pub fn positions(&self, step: usize) -> Option<&DVector<f64>> {
        self.snapshots.get(step)
    }

    pub fn final_positions(&self) -> Option<&DVector<f64>> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DVector<f64>> {
        self.snapshots.iter()
    }

    /// True when every recorded coordinate is a finite real number.
    pub fn is_finite(&self) -> bool {
        self.snapshots
            .iter()
            .all(|row| row.iter().all(|x| x.is_finite()))
    }
}
