use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use std::{fmt, fs};

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::algorithms::StoppingConditionType;
use crate::core::{Individual, IndividualExport, NslsError, Population, Problem, ProblemExport};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
/// The data with the elapsed time.
pub struct Elapsed {
    /// Elapsed hours.
    pub hours: u64,
    /// Elapsed minutes.
    pub minutes: u64,
    /// Elapsed seconds.
    pub seconds: u64,
}

#[derive(Serialize, Deserialize, Debug)]
/// The struct used to export an algorithm serialised data.
pub struct AlgorithmSerialisedExport<T: Serialize> {
    /// Specific options for an algorithm.
    pub options: T,
    /// The problem configuration.
    pub problem: ProblemExport,
    /// The individuals in the population.
    pub individuals: Vec<IndividualExport>,
    /// The generation the export was collected at.
    pub generation: usize,
    /// The algorithm name.
    pub algorithm: String,
    /// The time took to reach the `generation`.
    pub took: Elapsed,
}

/// The struct used to export an algorithm data.
#[derive(Debug)]
pub struct AlgorithmExport {
    /// The problem.
    pub problem: Arc<Problem>,
    /// The individuals with the solutions, constraint and objective values at the current
    /// generation.
    pub individuals: Vec<Individual>,
    /// The generation number.
    pub generation: usize,
    /// The algorithm name used to evolve the individuals.
    pub algorithm: String,
    /// The time the algorithm took to reach the current generation.
    pub took: Elapsed,
}

impl AlgorithmExport {
    /// Get the objective values of all individuals.
    ///
    /// returns: `Vec<Vec<f64>>`
    pub fn objectives(&self) -> Vec<Vec<f64>> {
        self.individuals
            .iter()
            .map(|i| i.objectives().to_vec())
            .collect()
    }

    /// Get the values of a variable in all individuals. This returns an error if the variable
    /// does not exist.
    ///
    /// # Arguments
    ///
    /// * `index`: The variable index.
    ///
    /// returns: `Result<Vec<f64>, NslsError>`
    pub fn variable_values(&self, index: usize) -> Result<Vec<f64>, NslsError> {
        self.individuals
            .iter()
            .map(|i| {
                i.variables()
                    .get(index)
                    .copied()
                    .ok_or(NslsError::NonExistingIndex("variable".to_string(), index))
            })
            .collect()
    }
}

impl Display for AlgorithmExport {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{} at {} generations, took {} hours, {} minutes and {} seconds",
            self.algorithm, self.generation, self.took.hours, self.took.minutes, self.took.seconds
        )
    }
}

/// The trait to use to implement an algorithm.
pub trait Algorithm<AlgorithmOptions: Serialize + DeserializeOwned>: Display {
    /// Initialise the algorithm.
    ///
    /// return: `Result<(), NslsError>`
    fn initialise(&mut self) -> Result<(), NslsError>;

    /// Evolve the population.
    ///
    /// return: `Result<(), NslsError>`
    fn evolve(&mut self) -> Result<(), NslsError>;

    /// Return the current step of the algorithm evolution.
    ///
    /// return: `usize`.
    fn generation(&self) -> usize;

    /// Return the algorithm name.
    ///
    /// return: `String`.
    fn name(&self) -> String;

    /// Get the time when the algorithm started.
    ///
    /// return: `&Instant`.
    fn start_time(&self) -> &Instant;

    /// Return the stopping condition.
    ///
    /// return: `&StoppingConditionType`.
    fn stopping_condition(&self) -> &StoppingConditionType;

    /// Return the evolved population.
    ///
    /// return: `&Population`.
    fn population(&self) -> &Population;

    /// Return the problem.
    ///
    /// return: `Arc<Problem>`.
    fn problem(&self) -> Arc<Problem>;

    /// Return the options used to configure the algorithm.
    ///
    /// return: `AlgorithmOptions`.
    fn algorithm_options(&self) -> AlgorithmOptions;

    /// Get the elapsed hours, minutes and seconds since the start of the algorithm.
    ///
    /// return: `[u64; 3]`. An array with the number of elapsed hours, minutes and seconds.
    fn elapsed(&self) -> [u64; 3] {
        let duration = self.start_time().elapsed();
        let seconds = duration.as_secs() % 60;
        let minutes = (duration.as_secs() / 60) % 60;
        let hours = (duration.as_secs() / 60) / 60;
        [hours, minutes, seconds]
    }

    /// Format the elapsed time as string.
    ///
    /// return: `String`.
    fn elapsed_as_string(&self) -> String {
        let [hours, minutes, seconds] = self.elapsed();
        format!(
            "{:0>2} hours, {:0>2} minutes and {:0>2} seconds",
            hours, minutes, seconds
        )
    }

    /// Initialise the algorithm and evolve the population until the stopping condition is met.
    ///
    /// return: `Result<(), NslsError>`
    fn run(&mut self) -> Result<(), NslsError> {
        info!("Starting {}", self.name());
        self.initialise()?;

        loop {
            info!("Generation #{}", self.generation());
            self.evolve()?;
            info!(
                "Evolved generation #{} - Elapsed Time: {}",
                self.generation(),
                self.elapsed_as_string()
            );
            debug!("========================");

            let cond = self.stopping_condition();
            if cond.is_met(self.generation(), self.start_time().elapsed()) {
                info!("Stopping evolution because the {} was reached", cond.name());
                info!("Took {}", self.elapsed_as_string());
                break;
            }
        }

        Ok(())
    }

    /// Get the results of the run.
    ///
    /// return: `AlgorithmExport`.
    fn get_results(&self) -> AlgorithmExport {
        let [hours, minutes, seconds] = self.elapsed();
        AlgorithmExport {
            problem: self.problem(),
            individuals: self.population().individuals().to_vec(),
            generation: self.generation(),
            algorithm: self.name(),
            took: Elapsed {
                hours,
                minutes,
                seconds,
            },
        }
    }

    /// Save the algorithm data (individuals' objective, variables and constraints, the problem,
    /// ...) to a JSON file named `<prefix>_<algorithm name>_gen<generation>.json`. This returns
    /// an error if the file cannot be saved.
    ///
    /// # Arguments
    ///
    /// * `destination`: The folder where to save the JSON file.
    /// * `file_prefix`: A prefix to prepend at the beginning of the file name. This is `Final`
    ///    when `None`.
    ///
    /// return `Result<PathBuf, NslsError>`. The path to the saved file.
    fn save_to_json(
        &self,
        destination: &Path,
        file_prefix: Option<&str>,
    ) -> Result<PathBuf, NslsError> {
        if !destination.is_dir() {
            return Err(NslsError::AlgorithmExport(format!(
                "The destination folder '{:?}' does not exist",
                destination
            )));
        }
        let file_prefix = file_prefix.unwrap_or("Final");

        let [hours, minutes, seconds] = self.elapsed();
        let problem = self.problem();
        let export = AlgorithmSerialisedExport {
            options: self.algorithm_options(),
            problem: problem.serialise(),
            individuals: self.population().serialise(&problem),
            generation: self.generation(),
            algorithm: self.name(),
            took: Elapsed {
                hours,
                minutes,
                seconds,
            },
        };
        let data = serde_json::to_string_pretty(&export).map_err(|e| {
            NslsError::AlgorithmExport(format!(
                "The following error occurred while converting the results: {e}"
            ))
        })?;

        let mut file = destination.to_path_buf();
        file.push(format!(
            "{}_{}_gen{}.json",
            file_prefix,
            self.name(),
            self.generation()
        ));

        info!("Saving JSON file {:?}", file);
        fs::write(&file, data).map_err(|e| {
            NslsError::AlgorithmExport(format!(
                "The following error occurred while exporting the JSON file: {e}",
            ))
        })?;
        Ok(file)
    }

    /// Read the results previously exported with [`Self::save_to_json`].
    ///
    /// # Arguments
    ///
    /// * `file`: The path to the JSON file.
    ///
    /// returns: `Result<AlgorithmSerialisedExport<AlgorithmOptions>, NslsError>`
    fn read_results(
        file: &Path,
    ) -> Result<AlgorithmSerialisedExport<AlgorithmOptions>, NslsError> {
        if !file.exists() {
            return Err(NslsError::Generic(format!(
                "The file '{:?}' does not exist",
                file
            )));
        }
        let data = fs::read_to_string(file)
            .map_err(|e| NslsError::Generic(format!("Cannot read the JSON file because: {e}")))?;
        serde_json::from_str(&data)
            .map_err(|e| NslsError::Generic(format!("Cannot parse the JSON file because: {e}")))
    }
}
