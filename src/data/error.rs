use thiserror::Error;

/// Result of a dataset check that stops at the first violation.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// An invariant of the compiled-in dataset that does not hold.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
	/// Two entities share the same id.
	#[error("duplicate entity id: {0}")]
	DuplicateId(&'static str),

	/// A metric lies outside its declared range.
	#[error("{id}: {metric} = {value} is outside [{min}, {max}]")]
	MetricOutOfRange {
		/// Offending entity.
		id: &'static str,
		/// Metric name.
		metric: &'static str,
		/// Authored value.
		value: f64,
		/// Inclusive lower bound.
		min: f64,
		/// Inclusive upper bound.
		max: f64,
	},

	/// A sparkline sample is negative.
	#[error("{id}: sparkline[{index}] = {value} is negative")]
	NegativeSample {
		/// Offending entity.
		id: &'static str,
		/// Position in the series.
		index: usize,
		/// Authored value.
		value: f64,
	},

	/// A link weight lies outside `[0, 1]`.
	#[error("link {from}-{to}: weight {weight} is outside [0, 1]")]
	LinkWeightOutOfRange {
		/// Link source id.
		from: &'static str,
		/// Link target id.
		to: &'static str,
		/// Authored weight.
		weight: f64,
	},
}
