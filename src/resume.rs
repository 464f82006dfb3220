// src/resume.rs
//
// The fixed knowledge document the chat assistant answers from. The content
// never changes at runtime; every prompt embeds the same system instruction.

/// Resume and professional background for the portfolio's subject.
pub const RESUME_CONTEXT: &str = r##"
### Rajorshi Tah: Professional Profile and Resume Context

Rajorshi Tah is a software developer and backend engineer based in Tokyo, Japan, with nearly three years of professional experience specializing in backend engineering, API design, GenAI applications, NLP, machine learning, and cloud computing. He holds dual degrees from the Indian Institute of Technology (IIT) Kharagpur, one of India's premier engineering institutions. His career blends academic excellence, research internships, and hands-on development in high-impact projects for global clients, particularly in automation, AI-driven tools, and data pipelines.

#### Contact Information
- Email: rajorshitah19@gmail.com
- Phone (Japan): (+81) 80-4817-2852
- Phone (India): (+91) 94748-06123
- Location: Tokyo, Japan 136-0073
- LinkedIn: https://in.linkedin.com/in/rajorshitah

#### Professional Experience
Software Developer | Accenture | Tokyo, Japan | May 2022 - Present

- UI Automation Dashboard
  Led development of the backend of an Automated Test Tracking Dashboard for a Japanese tech client, architecting a RESTful API integrated with Robot Framework to optimize workflow execution, managing and analyzing the results of 30,000 test cases daily.
  - Designed backend architecture of a UI dashboard with Node.js and MongoDB, developing 100+ scalable APIs for optimal performance.
  - Developed APIs for role-based access management and OAuth 2.0 based authentication using JWT tokens for 70+ team members.
  - Enabled API documentation using Swagger and used Docker to containerize the app, finally deploying in an AWS EC2 instance.
  - Created automation scripts with Robot Framework, achieving a 90% reduction in testing time and increasing testing efficiency.
  - Integrated UI testing automation scripts with dashboard using Robot Listener, enabling real-time tracking and reporting of test failures.
  - Led a team of 4 developers while coordinating with 2 sister teams.
  - Tech Stack: Node.js, MongoDB, Python, GO, Docker, Robot Framework, Jira, AWS

- HTML Locator Gen AI Application
  Delivered a GenAI Application for generating locators in HTML/XML pages by integrating RESTful APIs for data retrieval and processing, refining prompts, and deploying the solution on AWS Cloud handling around 5000+ requests daily used by 20+ testing teams.
  - Leveraged Flask for back-end architecture and PostgreSQL for database management, while deploying in Docker to ensure scalability.
  - Implemented Agentic RAG using Llama Index to enhance dynamic retrieval and reasoning, generating 87% accurate HTML/XML locators.
  - Created a data collection and preprocessing pipeline generating embeddings for optimized storage in a ChromaDB vector database.
  - Utilized LoRA tuning with the Transformers library to finetune open-source LLMs, enhancing locator generation accuracy to 89%.
  - Tech Stack: Flask, PostgreSQL, Docker, LlamaIndex, Prompt Engineering, ChromaDB, LoRA, Transformers

- Skill and Schedule Tracking Dashboard
  Developed an efficient ETL system to monitor employee skills, experience and availability, resulting in a 70% reduction in project allocation time of around 20,000 project members.
  - Engineered a real-time employee data pipeline from Workday using Kafka, streaming 25,000+ weekly events into InfluxDB.
  - Designed custom data visualization solutions, such as Tree Maps, using Python to meet client requirements and drive decision-making.
  - Optimized real-time data visualization by integrating InfluxDB with Grafana, enabling seamless creation of dynamic dashboards.
  - Tech Stack: Python, Kafka, InfluxDB, Grafana, Workday

#### Internships
NLP Researcher | Graduate School of Informatics, Kyoto University | Kyoto, Japan | May 2019 - Jul 2019
- Pioneered the development of a high-performance Question-Answering model leveraging Wikipedia as the sole knowledge corpus.
- Used a Neural Ranking model to retrieve Top 100 documents based on query and document similarity scores from a Wikipedia dump.
- Trained BERT on the SQuAD dataset as the Reader Model, improving accuracy by 4% over the DrQA model.
- Generated Negative Samples using the SQuAD 2.0 dataset and trained the Reader Model, improving accuracy by 2.9%.

Data Science Intern | Indian School of Business | Hyderabad, India | May 2020 - Jul 2020
- Developed a time-series model to forecast Earnings Per Share for 5000+ US-based companies, using 35 years of historical financial data.
- Implemented Random Forest Regressor, RNN, and ARIMA on the data, surpassing 33.8% of Equity Analysts.
- Enhanced model efficacy by applying a rolling window strategy, boosting the percentage of equity analysts outperformed to 34.9%.
- Engineered a self-training algorithm for domain adaptation, elevating the F1-score for cross-domain suggestions by 3%.

#### Education
- Masters in Mechanical Engineering, Indian Institute of Technology Kharagpur, GPA 8.63, Jul 2020 - May 2021
- Bachelors in Mechanical Engineering, Indian Institute of Technology Kharagpur, GPA 8.63, Jul 2016 - May 2021
- Bachelors in Computer Science and Engineering (Minor), Indian Institute of Technology Kharagpur, GPA 8.35, Jul 2016 - May 2021

#### Key Skills
- Software Skills: Backend Development, NLP, Machine Learning, Computer Vision, Cloud Computing (AWS, Azure), Docker, Git
- Programming: Python, C++, Node.js, React.js, SQL
- Databases: PostgreSQL, MongoDB
- Deep Learning Frameworks: TensorFlow, Keras

#### Certifications
- AWS Certified Machine Learning Specialty
- AWS Certified Solutions Architect - Associate
- Kaggle Expert

#### Achievements
- Achieved AIR 2907 (99.8 percentile) in JEE Advanced 2016; secured State Rank 49 (99.98 percentile) in WBJEE 2016 in West Bengal.
- Secured AIR 861 (98.6 percentile) in KVPY 2015-16 among 60,000 students.
- Managed sports activities for B.R. Ambedkar Hall, a residence of 1500 students, as Secretary of Sports, leading participation in multiple General Championship events.
"##;

/// Builds the single system instruction sent ahead of every conversation:
/// persona directive plus the embedded resume document. Within-context
/// questions get factual answers; anything else gets a light, favorable,
/// clearly speculative reply instead of invented facts.
pub fn system_prompt() -> String {
    format!(
        "You are an AI assistant acting as a professional yet witty 'wingman' for Rajorshi Tah. \
         Your job is to answer questions about Rajorshi based only on his resume and professional background. \
         When the question is within context, respond factually, clearly, and in a professional tone. \
         If the question is out of context or not answerable from the resume, respond humorously while still making Rajorshi look good. \
         For example, say things like: \
         'I don't have that info, but given his track record of leading teams, he'd probably ace it,' \
         or 'That's not in the resume, but with his IIT background, I wouldn't be surprised if he secretly built it over a weekend.' \
         Always aim to make Rajorshi sound skilled, resourceful, and likable. \
         Here is the resume and professional background information:\n\n{}",
        RESUME_CONTEXT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_embeds_resume() {
        let prompt = system_prompt();
        assert!(prompt.contains("wingman"));
        assert!(prompt.contains("Rajorshi Tah: Professional Profile"));
        assert!(prompt.contains("Accenture"));
    }
}
