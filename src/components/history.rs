use nalgebra::SVector;

/// Time history of an `N`-dimensional state, one column per time sample.
///
/// Columns live contiguously, so integrators read and write them in place by index.
#[derive(Debug, Clone, PartialEq)]
pub struct StateHistory<const N: usize> {
    columns: Vec<SVector<f64, N>>,
}

impl<const N: usize> StateHistory<N> {
    /// Allocates `samples` columns, with `initial` in column 0 and zeros elsewhere.
    pub fn new(initial: SVector<f64, N>, samples: usize) -> Self {
        let mut columns = vec![SVector::<f64, N>::zeros(); samples.max(1)];
        columns[0] = initial;
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, sample: usize) -> &SVector<f64, N> {
        &self.columns[sample]
    }

    pub fn set_column(&mut self, sample: usize, state: SVector<f64, N>) {
        self.columns[sample] = state;
    }

    pub fn columns(&self) -> &[SVector<f64, N>] {
        &self.columns
    }

    pub fn first(&self) -> &SVector<f64, N> {
        &self.columns[0]
    }

    pub fn last(&self) -> &SVector<f64, N> {
        &self.columns[self.columns.len() - 1]
    }

    /// One state component across every sample.
    pub fn row(&self, component: usize) -> impl Iterator<Item = f64> + '_ {
        self.columns.iter().map(move |column| column[component])
    }

    /// Index of the first sample containing a NaN or infinity.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.iter().any(|value| !value.is_finite()))
    }
}
