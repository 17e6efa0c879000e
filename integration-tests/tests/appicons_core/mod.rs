mod bundler;
