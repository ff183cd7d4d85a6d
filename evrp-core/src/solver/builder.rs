use super::*;

/// Provides configurable way to build solver.
pub struct Builder {
    evaluator: Arc<RouteEvaluator>,
    config: SolverConfig,
    environment: Arc<Environment>,
    registry: OperatorRegistry,
    initial: Option<Solution>,
}

impl Builder {
    /// Creates a new instance of `Builder` with default config, environment and all operators.
    pub fn new(evaluator: Arc<RouteEvaluator>) -> Self {
        Self {
            evaluator,
            config: SolverConfig::default(),
            environment: Arc::new(Environment::default()),
            registry: OperatorRegistry::default(),
            initial: None,
        }
    }

    /// Sets search parameters.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets environment.
    pub fn with_environment(mut self, environment: Arc<Environment>) -> Self {
        self.environment = environment;
        self
    }

    /// Sets operator registry.
    /// Default contains every operator.
    pub fn with_registry(mut self, registry: OperatorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Sets initial solution instead of the constructed one.
    pub fn with_initial_solution(mut self, solution: Solution) -> Self {
        (self.environment.logger)(format!("provided initial solution with {} routes", solution.route_count()).as_str());
        self.initial = Some(solution);
        self
    }

    /// Sets max iterations to be run.
    /// Default is 25000.
    pub fn with_max_iterations(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            (self.environment.logger)(format!("configured to use max iterations: {limit}").as_str());
            self.config.iterations = limit;
        }
        self
    }

    /// Builds the solver.
    pub fn build(self) -> GenericResult<Solver> {
        self.config.validate()?;

        if !self.registry.is_complete() {
            return Err("every operator family should have at least one operator".into());
        }

        Ok(Solver {
            evaluator: self.evaluator,
            config: self.config,
            environment: self.environment,
            registry: self.registry,
            initial: self.initial,
        })
    }
}
