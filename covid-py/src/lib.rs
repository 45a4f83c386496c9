use pyo3::{prelude::*, wrap_pyfunction};

extern crate pyo3;
use covid_risk::prelude as rs;
use covid_risk::prelude::{Real, RiskConfig, RiskError, RiskQuantity};
use covid_risk::sweep;
use paste::paste;
use pyo3::types::PyDict;

use pyo3::exceptions::*;
use pythonize::{depythonize, pythonize};

/// Map risk errors to the closest Python exception.
fn to_py_err(err: RiskError) -> PyErr {
    match err {
        RiskError::NotFound { .. } => PyIndexError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

fn parse_quantity(name: &str) -> PyResult<RiskQuantity> {
    RiskQuantity::ALL
        .iter()
        .copied()
        .find(|q| q.name().replace(' ', "_") == name)
        .ok_or_else(|| PyKeyError::new_err(format!("unknown quantity: {}", name)))
}

macro_rules! py_mixture_queries {
    ($($name:ident),*) => {
        paste! {
            $(
                /// Mixture of the three literature models for the given age.
                #[pyfunction]
                fn $name(weights: (Real, Real, Real), age: Real) -> PyResult<Real> {
                    rs::$name([weights.0, weights.1, weights.2], age).map_err(to_py_err)
                }

                /// Direct table value of a single literature model.
                #[pyfunction]
                fn [<$name _for_model>](index: usize, age: Real) -> PyResult<Real> {
                    rs::[<$name _for_model>](index, age).map_err(to_py_err)
                }
            )*
        }
    };
}

py_mixture_queries!(hospitalization_probability, hospitalization_onset_day);

/// Negative days raise ValueError like any other day outside the table.
#[pyfunction]
fn relative_infectiousness(model_index: usize, day: i64) -> PyResult<Real> {
    rs::check_day(day)
        .and_then(|d| rs::relative_infectiousness(model_index, d))
        .map_err(to_py_err)
}

#[pyfunction]
fn mortality_density(age: Real, day: Real) -> PyResult<Real> {
    rs::mortality_density(age, day).map_err(to_py_err)
}

#[pyfunction]
fn cumulative_mortality(age: Real, day: Real) -> PyResult<Real> {
    rs::cumulative_mortality(age, day).map_err(to_py_err)
}

/// Mortality density for each age (rows) and day (columns). Invalid points
/// are NaN.
#[pyfunction]
fn mortality_grid(ages: Vec<Real>, days: Vec<Real>) -> Vec<Vec<Real>> {
    let grid = sweep::mortality_grid(&ages, &days);
    grid.values().outer_iter().map(|row| row.to_vec()).collect()
}

/// List model descriptions for a quantity such as "infectiousness" or
/// "hospitalization_probability".
#[pyfunction]
fn models(quantity: &str) -> PyResult<Vec<PyObject>> {
    let quantity = parse_quantity(quantity)?;
    let gil = Python::acquire_gil();
    let py = gil.python();
    let mut out = Vec::new();
    for info in rs::models(quantity) {
        out.push(pythonize(py, info)?);
    }
    Ok(out)
}

#[pyclass]
#[derive(Debug)]
pub struct RiskModel {
    data: rs::RiskModel,
}

#[pymethods]
impl RiskModel {
    #[new]
    #[args(config = "None")]
    fn new(config: Option<&PyDict>) -> PyResult<Self> {
        let cfg: RiskConfig = match config {
            Some(c) => depythonize(c.as_ref())?,
            None => RiskConfig::default(),
        };
        let data = cfg.build().map_err(to_py_err)?;
        Ok(RiskModel { data })
    }

    #[staticmethod]
    fn from_toml(data: &str) -> PyResult<Self> {
        let cfg = RiskConfig::from_toml(data).map_err(to_py_err)?;
        let data = cfg.build().map_err(to_py_err)?;
        Ok(RiskModel { data })
    }

    fn hospitalization_probability(&self, age: Real) -> PyResult<Real> {
        self.data.hospitalization_probability(age).map_err(to_py_err)
    }

    fn hospitalization_onset_day(&self, age: Real) -> PyResult<Real> {
        self.data.hospitalization_onset_day(age).map_err(to_py_err)
    }

    fn relative_infectiousness(&self, day: i64) -> PyResult<Real> {
        rs::check_day(day)
            .and_then(|d| self.data.relative_infectiousness(d))
            .map_err(to_py_err)
    }

    fn mortality_density(&self, age: Real, day: Real) -> PyResult<Real> {
        self.data.mortality_density(age, day).map_err(to_py_err)
    }

    fn __repr__(&self) -> PyResult<String> {
        Ok(format!("{:?}", self.data))
    }
}

#[pymodule]
fn covidrisk(_py: Python, m: &PyModule) -> PyResult<()> {
    use simple_logger::SimpleLogger;
    // Another extension may have installed a logger already.
    let _ = SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .init();

    m.add_class::<RiskModel>()?;
    m.add_function(wrap_pyfunction!(hospitalization_probability, m)?)?;
    m.add_function(wrap_pyfunction!(hospitalization_probability_for_model, m)?)?;
    m.add_function(wrap_pyfunction!(hospitalization_onset_day, m)?)?;
    m.add_function(wrap_pyfunction!(hospitalization_onset_day_for_model, m)?)?;
    m.add_function(wrap_pyfunction!(relative_infectiousness, m)?)?;
    m.add_function(wrap_pyfunction!(mortality_density, m)?)?;
    m.add_function(wrap_pyfunction!(cumulative_mortality, m)?)?;
    m.add_function(wrap_pyfunction!(mortality_grid, m)?)?;
    m.add_function(wrap_pyfunction!(models, m)?)?;

    Ok(())
}
