/// Kind of compute engine behind a computational resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataEngineType {
    /// Spark cluster built from plain instances.
    SparkStandalone,

    /// Provider-managed cluster service.
    CloudService,
}

const DOCKER_IMAGE_PREFIX: &str = "docker.dlab-";

impl DataEngineType {
    pub fn image_name(&self) -> &'static str {
        match self {
            DataEngineType::SparkStandalone => "dataengine",
            DataEngineType::CloudService => "dataengine-service",
        }
    }

    /// Resolves the engine from a docker image name such as `docker.dlab-dataengine`.
    pub fn from_docker_image_name(image_name: &str) -> Option<DataEngineType> {
        let bare = image_name.strip_prefix(DOCKER_IMAGE_PREFIX).unwrap_or(image_name);
        match bare {
            "dataengine" => Some(DataEngineType::SparkStandalone),
            "dataengine-service" => Some(DataEngineType::CloudService),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_prefixed_and_bare_names() {
        assert_eq!(DataEngineType::from_docker_image_name("docker.dlab-dataengine"), Some(DataEngineType::SparkStandalone));
        assert_eq!(DataEngineType::from_docker_image_name("dataengine-service"), Some(DataEngineType::CloudService));
        assert_eq!(DataEngineType::from_docker_image_name("docker.dlab-jupyter"), None);

        for engine in [DataEngineType::SparkStandalone, DataEngineType::CloudService] {
            assert_eq!(DataEngineType::from_docker_image_name(engine.image_name()), Some(engine));
        }
    }
}
