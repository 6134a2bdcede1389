use pyo3::PyResult;

pub type PyCrossSolution = PyResult<(
    Vec<String>,
    Vec<String>,
    Vec<String>,
    Vec<(String, usize)>,
    Vec<(String, usize)>,
)>;
