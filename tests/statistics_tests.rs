//! Statistics engine tests over in-memory record sources.

use std::sync::atomic::Ordering;

use empstats::application::statistics::EmployeeStatistics;
use empstats::domain::error::StatsError;
use empstats::error::Error;
use empstats::testkit::domain::{employee, sample_employees};
use empstats::testkit::source::{CountingSource, FailingSource};

const EPS: f64 = 1e-9;

#[test]
fn sample_age_statistics() {
    let stats = EmployeeStatistics::new(CountingSource::new(sample_employees()));
    assert_eq!(stats.mean_age().unwrap(), 49.0);
    assert_eq!(stats.median_age().unwrap(), 61.0);
    assert!((stats.age_variance().unwrap() - 322.8).abs() < EPS);
}

#[test]
fn sample_salary_statistics() {
    let stats = EmployeeStatistics::new(CountingSource::new(sample_employees()));
    assert_eq!(stats.mean_salary().unwrap(), 234_662.0);
    assert_eq!(stats.median_salary().unwrap(), 170_750.0);

    let salaries = stats.salaries().unwrap();
    let expected = salaries
        .iter()
        .map(|s| (s - 234_662.0).powi(2))
        .sum::<f64>()
        / salaries.len() as f64;
    assert!((stats.salary_variance().unwrap() - expected).abs() < 1e-3);
}

#[test]
fn sample_name_modes() {
    let stats = EmployeeStatistics::new(CountingSource::new(sample_employees()));
    assert_eq!(stats.first_name_mode().unwrap(), "Ashton");
    assert!(matches!(
        stats.last_name_mode(),
        Err(Error::Stats(StatsError::NoUniqueMode))
    ));
}

#[test]
fn source_moved_into_engine_is_fetched_once() {
    let source = CountingSource::new(sample_employees());
    let counter = source.counter();
    let stats = EmployeeStatistics::new(source);

    assert_eq!(counter.load(Ordering::SeqCst), 0);
    stats.mean_age().unwrap();
    stats.median_salary().unwrap();
    stats.first_name_mode().unwrap();
    stats.salary_age_pairs().unwrap();
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn pairs_are_sorted_by_salary() {
    let stats = EmployeeStatistics::new(CountingSource::new(sample_employees()));
    let pairs = stats.salary_age_pairs().unwrap();
    assert_eq!(pairs.len(), 5);
    assert!(pairs.windows(2).all(|w| w[0].salary <= w[1].salary));
    assert_eq!(pairs[0].age, 66.0);
    assert_eq!(pairs[4].age, 22.0);
}

#[test]
fn missing_data_surfaces_as_schema_error() {
    let source = FailingSource::missing_data();
    let stats = EmployeeStatistics::new(&source);
    assert!(matches!(stats.ages(), Err(Error::Schema(_))));
    assert_eq!(source.calls(), 1);
}

#[test]
fn bad_numeric_field_is_a_parse_error() {
    let stats = EmployeeStatistics::new(CountingSource::new(vec![
        employee("Tiger Nixon", "61", "320800"),
        employee("Garrett Winters", "sixty-three", "170750"),
    ]));
    match stats.mean_age() {
        Err(Error::Parse { index, field, .. }) => {
            assert_eq!(index, 1);
            assert_eq!(field, "employee_age");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert_eq!(stats.mean_salary().unwrap(), (320_800.0 + 170_750.0) / 2.0);
}
