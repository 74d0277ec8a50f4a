pub struct Solution {
    pub time: Vec<f64>,
    pub infected: Vec<f64>,
}

impl Solution {
    pub fn new(len: usize, dt: f64) -> Solution {
        Solution {
            time: (0..len).map(|j| j as f64 * dt).collect(),
            infected: vec![0.0; len],
        }
    }

    pub fn susceptible(&self, capacity: f64) -> Vec<f64> {
        self.infected
            .iter()
            .map(|infected| capacity - infected)
            .collect()
    }
}
