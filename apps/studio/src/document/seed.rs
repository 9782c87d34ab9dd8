//! The canned demo document produced by the scripted enhancement backend.

use crate::document::model::{CvDocument, EducationEntry, ExperienceEntry, Header};

/// Returns the demo CV the prototype "extracts" from every upload.
pub fn demo_document() -> CvDocument {
    CvDocument {
        header: Header {
            name: "John Smith".to_string(),
            title: "Senior Software Engineer".to_string(),
            email: "john.smith@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            linkedin: "linkedin.com/in/johnsmith".to_string(),
        },
        profile: "Experienced software engineer with 8+ years of expertise in full-stack \
                  development, cloud architecture, and team leadership. Proven track record \
                  of delivering scalable solutions and mentoring junior developers."
            .to_string(),
        experience: vec![
            ExperienceEntry {
                title: "Senior Software Engineer".to_string(),
                company: "Tech Corp".to_string(),
                period: "2020 - Present".to_string(),
                description: "Led development of microservices architecture serving 1M+ users. \
                              Mentored team of 5 junior developers and improved deployment \
                              efficiency by 40%."
                    .to_string(),
            },
            ExperienceEntry {
                title: "Software Engineer".to_string(),
                company: "StartupXYZ".to_string(),
                period: "2018 - 2020".to_string(),
                description: "Built responsive web applications using React and Node.js. \
                              Collaborated with design team to implement pixel-perfect UI \
                              components."
                    .to_string(),
            },
        ],
        education: vec![EducationEntry {
            degree: "Bachelor of Science in Computer Science".to_string(),
            school: "University of California, Berkeley".to_string(),
            year: "2018".to_string(),
        }],
        skills: [
            "JavaScript",
            "TypeScript",
            "React",
            "Node.js",
            "Python",
            "AWS",
            "Docker",
            "Kubernetes",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
    }
}
