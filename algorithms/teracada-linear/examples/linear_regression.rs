use teracada::metrics::Regression;
use teracada::NumericArray;
use teracada_linear::{LinearError, RegressionModel};

fn main() -> Result<(), LinearError> {
    env_logger::init();

    let x = NumericArray::from_vec(vec![5., 15., 25., 35., 45., 55.]);
    let y = NumericArray::from_vec(vec![5., 20., 14., 32., 22., 38.]);

    println!("{}", x);
    println!("{}", y);

    let mut model = RegressionModel::new();
    model.fit(&x, &y)?;

    println!("Intercept: {}", model.intercept()?);
    println!("Slope: {}", model.slope()?);
    println!("Prediction at 60: {}", model.predict(60.)?);

    let pred = model.predict_array(&x)?;
    println!("r2 from prediction: {}", pred.r2(&y)?);

    Ok(())
}
