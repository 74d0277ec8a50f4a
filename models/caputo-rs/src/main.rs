pub mod output;
pub mod parameters;
pub mod plot;
pub mod solver;

use runenv::Environment;

use parameters::Parameters;
use solver::L1Solver;

fn main() {
    let env: Environment<Parameters> = Environment::load();
    let parameters = env.input.clone().expect("failed to load parameters");

    if let Err(err) = parameters.validate() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    let solution = L1Solver::solve(&parameters);
    let susceptible = solution.susceptible(parameters.capacity);

    let path = env.artifact_path("solution_I_and_S.png");
    plot::render(&path, &solution.time, &solution.infected, &susceptible)
        .expect("failed to render plot");
}
