use depot_tour::solver::scaling;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    scaling::run()
}
