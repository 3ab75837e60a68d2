//! Static question bank served when the AI is unavailable.

use intervue_common::{Question, QuestionCategory};

use crate::categories::JobCategory;

const SOFTWARE_ENGINEER: &[&str] = &[
    "Explain the difference between inheritance and composition in object-oriented programming.",
    "How would you optimize a website that loads slowly?",
    "Describe a challenging bug you've encountered and how you solved it.",
    "What's your experience with agile development methodologies?",
    "How do you approach testing your code?",
    "How do you decide when a piece of code needs refactoring?",
    "Walk me through how you would design a URL shortening service.",
];

const DATA_SCIENTIST: &[&str] = &[
    "Explain the difference between supervised and unsupervised learning.",
    "How would you handle missing data in a dataset?",
    "Describe a project where you applied machine learning techniques.",
    "How do you evaluate model performance?",
    "Explain overfitting and how to prevent it.",
    "How would you explain a model's predictions to a non-technical stakeholder?",
    "How do you design an A/B test and decide when it has run long enough?",
];

const PRODUCT_MANAGER: &[&str] = &[
    "How do you decide what to build next when everything feels like a priority?",
    "Tell me about a product launch that did not go as planned. What did you learn?",
    "Which metrics would you track for a newly launched feature, and why?",
    "How do you handle disagreement between engineering and design on a feature?",
    "Describe how you gather and validate customer requirements.",
    "Pick a product you use daily. What would you change about it?",
];

const MARKETING: &[&str] = &[
    "Walk me through a campaign you ran from planning to results.",
    "How do you measure the return on a marketing investment?",
    "How would you position a new product in a crowded market?",
    "Describe a time you used data to change a marketing strategy.",
    "Which channels would you prioritize for a limited budget, and why?",
    "How do you keep brand messaging consistent across channels?",
];

const SALES: &[&str] = &[
    "Walk me through your sales process from prospecting to close.",
    "Tell me about a deal you lost. What would you do differently?",
    "How do you handle a prospect who says the price is too high?",
    "How do you prioritize accounts in your pipeline?",
    "Describe how you build trust with a new client.",
    "Sell me a product you believe in.",
];

const CUSTOMER_SERVICE: &[&str] = &[
    "Tell me about a time you turned an unhappy customer into a satisfied one.",
    "How do you stay calm when a customer is angry or rude?",
    "How do you handle a request that goes against company policy?",
    "Describe how you prioritize when several customers need help at once.",
    "What does excellent customer service mean to you?",
    "How do you follow up to make sure an issue was really resolved?",
];

const FINANCE: &[&str] = &[
    "Walk me through the three main financial statements and how they connect.",
    "How would you build a budget forecast for a new business unit?",
    "Describe a time you found an error in financial data. How did you handle it?",
    "How do you evaluate whether an investment is worthwhile?",
    "Explain working capital and why it matters.",
    "How do you present financial results to non-finance stakeholders?",
];

const HUMAN_RESOURCES: &[&str] = &[
    "How do you handle a conflict between two employees?",
    "Describe your approach to running a fair hiring process.",
    "Tell me about a policy you introduced or improved. What was the outcome?",
    "How do you keep sensitive employee information confidential?",
    "How would you improve retention in a team with high turnover?",
    "How do you support managers through a difficult performance conversation?",
];

const DESIGN: &[&str] = &[
    "Walk me through your design process on a recent project.",
    "How do you incorporate user research into your designs?",
    "Tell me about a time you had to defend a design decision.",
    "How do you balance user needs with business goals?",
    "How do you measure whether a design is successful?",
    "Describe how you make your designs accessible.",
];

const OPERATIONS: &[&str] = &[
    "Describe a process you improved. How did you measure the improvement?",
    "How do you identify bottlenecks in a workflow?",
    "Tell me about a time you managed a supply or resource shortage.",
    "How do you prioritize competing operational demands?",
    "Which KPIs would you use to monitor day-to-day operations?",
    "How do you roll out a process change across several teams?",
];

pub fn bank_for(category: JobCategory) -> &'static [&'static str] {
    match category {
        JobCategory::SoftwareEngineer => SOFTWARE_ENGINEER,
        JobCategory::DataScientist    => DATA_SCIENTIST,
        JobCategory::ProductManager   => PRODUCT_MANAGER,
        JobCategory::Marketing        => MARKETING,
        JobCategory::Sales            => SALES,
        JobCategory::CustomerService  => CUSTOMER_SERVICE,
        JobCategory::Finance          => FINANCE,
        JobCategory::HumanResources   => HUMAN_RESOURCES,
        JobCategory::Design           => DESIGN,
        JobCategory::Operations       => OPERATIONS,
    }
}

/// The first `count` bank questions of `category`, tagged `general`.
pub fn default_questions(category: JobCategory, count: usize) -> Vec<Question> {
    bank_for(category)
        .iter()
        .take(count)
        .map(|q| Question::new(*q, QuestionCategory::General))
        .collect()
}
